//! Field Mapper: one zerolog field-method link → one `slog.*` attribute call.
//!
//! slog exposes fewer numeric widths than zerolog, so the narrow integer and
//! float variants widen through an explicit Go conversion (`int8` → `int`,
//! `float32` → `float64`, `uint8` → `uint64`). That widening is lossless for
//! the value range.
//!
//! Unknown method names with a key/value argument pair fall back to
//! `slog.Any`, which preserves the attribute untyped. Anything else is not
//! recognized and the caller must leave the whole chain alone.

use super::expr::GoExpr;

/// Convert one field-attaching call into the equivalent `slog` attribute
/// constructor, or `None` if the method is not convertible.
pub fn convert_field(name: &str, args: &[GoExpr]) -> Option<GoExpr> {
    let (target, target_args) = match name {
        "Bool" => ("Bool", args.to_vec()),
        "Dur" => ("Duration", args.to_vec()),
        "Float64" => ("Float64", args.to_vec()),
        "Str" => ("String", args.to_vec()),
        "Int" => ("Int", args.to_vec()),
        "Int64" => ("Int64", args.to_vec()),
        "Time" => ("Time", args.to_vec()),
        "Float32" => ("Float64", widened(args, "float64")?),
        "Int8" | "Int16" | "Int32" => ("Int", widened(args, "int")?),
        "Uint64" => ("UInt64", args.to_vec()),
        "Uint" | "Uint8" | "Uint16" | "Uint32" => ("Uint64", widened(args, "uint64")?),
        "Err" => {
            // zerolog's Err has no key argument; synthesize the "err" key.
            if args.len() != 1 {
                return None;
            }
            let mut with_key = vec![GoExpr::str_lit("err")];
            with_key.extend(args.iter().cloned());
            ("Any", with_key)
        }
        // Fallback: keep any unrecognized key/value pair as an untyped attribute.
        _ if args.len() == 2 => ("Any", args.to_vec()),
        _ => return None,
    };

    Some(GoExpr::call(GoExpr::selector("slog", target), target_args))
}

/// Keep the key, wrap the value in an explicit conversion. Requires the
/// usual (key, value) arity.
fn widened(args: &[GoExpr], conv: &str) -> Option<Vec<GoExpr>> {
    if args.len() != 2 {
        return None;
    }
    Some(vec![
        args[0].clone(),
        GoExpr::converted(conv, args[1].clone()),
    ])
}
