use crate::model::value::AttributeValue;

/// Canonical string form of an attribute value. Total over every variant:
/// strings pass through, floats render with shortest round-trip decimal
/// digits and never scientific notation, integers render base-10, bools as
/// `true`/`false`, and opaque values keep their pre-rendered text.
pub fn serialize(value: &AttributeValue) -> String {
    match value {
        AttributeValue::Str(text) => text.clone(),
        AttributeValue::F32(v) => v.to_string(),
        AttributeValue::F64(v) => v.to_string(),
        AttributeValue::I64(v) => v.to_string(),
        AttributeValue::U64(v) => v.to_string(),
        AttributeValue::Bool(v) => v.to_string(),
        AttributeValue::Opaque(text) => text.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strings_pass_through() {
        assert_eq!(serialize(&AttributeValue::from("abc")), "abc");
        assert_eq!(
            serialize(&AttributeValue::Opaque("<redacted>".to_string())),
            "<redacted>"
        );
    }

    #[test]
    fn integers_render_base_10() {
        assert_eq!(serialize(&AttributeValue::from(-42i32)), "-42");
        assert_eq!(serialize(&AttributeValue::from(42u8)), "42");
        assert_eq!(serialize(&AttributeValue::I64(i64::MIN)), "-9223372036854775808");
        assert_eq!(serialize(&AttributeValue::U64(u64::MAX)), "18446744073709551615");
    }

    #[test]
    fn bools_render_lowercase() {
        assert_eq!(serialize(&AttributeValue::Bool(true)), "true");
        assert_eq!(serialize(&AttributeValue::Bool(false)), "false");
    }

    #[test]
    fn floats_stay_decimal_and_round_trip() {
        assert_eq!(serialize(&AttributeValue::F64(0.25)), "0.25");
        assert_eq!(serialize(&AttributeValue::F32(1.5)), "1.5");
        // Large magnitudes expand instead of switching to exponent form.
        assert_eq!(
            serialize(&AttributeValue::F64(1e21)),
            "1000000000000000000000"
        );

        for v in [0.1f64, 1.0 / 3.0, f64::MAX, 5e-324] {
            let text = serialize(&AttributeValue::F64(v));
            assert!(!text.contains('e') && !text.contains('E'));
            assert_eq!(text.parse::<f64>().unwrap(), v);
        }
        for v in [0.3f32, f32::MAX, 1.0e-40f32] {
            let text = serialize(&AttributeValue::F32(v));
            assert!(!text.contains('e') && !text.contains('E'));
            assert_eq!(text.parse::<f32>().unwrap(), v);
        }
    }
}
