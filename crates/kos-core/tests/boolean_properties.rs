use kos_core::{BooleanValue, Convertible, KosError, Primitive, PrimitiveKind, Value};
use proptest::prelude::*;

fn any_kind() -> impl Strategy<Value = PrimitiveKind> {
    prop::sample::select(PrimitiveKind::ALL.to_vec())
}

proptest! {
    #[test]
    fn round_trips_through_bool(b in any::<bool>()) {
        let boxed = BooleanValue::from(b);
        prop_assert_eq!(bool::from(boxed), b);
        prop_assert_eq!(boxed.to_boolean().unwrap(), b);
        prop_assert_eq!(Value::from(b).to_boolean().unwrap(), b);
    }

    #[test]
    fn operators_agree_with_native(a in any::<bool>(), b in any::<bool>()) {
        let (x, y) = (BooleanValue::new(a), BooleanValue::new(b));
        prop_assert_eq!(x == y, a == b);
        prop_assert_eq!(x != y, a != b);
        prop_assert_eq!(x & y, a && b);
        prop_assert_eq!(x | y, a || b);
        prop_assert_eq!((!x).value(), !a);
        prop_assert!(x == a);
    }

    #[test]
    fn only_boolean_and_string_targets_succeed(b in any::<bool>(), kind in any_kind()) {
        let result = BooleanValue::new(b).convert(kind);
        match kind {
            PrimitiveKind::Boolean => prop_assert_eq!(result.unwrap(), Primitive::Boolean(b)),
            PrimitiveKind::String => {
                let text = if b { "True" } else { "False" };
                prop_assert_eq!(result.unwrap(), Primitive::String(text.to_string()));
            }
            _ => {
                let err = result.unwrap_err();
                prop_assert_eq!(&err, &KosError::Cast { from: "Boolean", to: kind });
                let message = err.to_string();
                prop_assert!(message.contains("Boolean"));
                prop_assert!(message.contains(kind.name()));
            }
        }
    }
}

#[test]
fn converted_values_report_their_kind() {
    for kind in [PrimitiveKind::Boolean, PrimitiveKind::String] {
        assert_eq!(BooleanValue::TRUE.convert(kind).unwrap().kind(), kind);
    }
}
