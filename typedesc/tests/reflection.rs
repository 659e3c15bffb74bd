use std::collections::HashSet;

use typedesc::{DefaultValue, Descriptor, PrimitiveDescriptor, PrimitiveKind};

mod common;

#[test]
pub fn names_are_derived_from_components() {
    let registry = common::registry();
    let int_array = registry.primitive_array(PrimitiveKind::Int);
    let int_matrix = registry.array_class_of(int_array);

    assert_eq!(registry.name(int_array), "int[]");
    assert_eq!(registry.name(int_matrix), "int[][]");
    assert_eq!(registry.name(registry.primitive(PrimitiveKind::Int)), "int");

    let strings = registry.array_class_of(registry.class_named("java.lang.String"));
    assert_eq!(registry.name(strings), "java.lang.String[]");
}

#[test]
pub fn binary_names() {
    let registry = common::registry();

    let cases = [
        ("boolean[]", "[Z"),
        ("char[]", "[C"),
        ("byte[]", "[B"),
        ("short[]", "[S"),
        ("int[]", "[I"),
        ("long[]", "[J"),
        ("float[]", "[F"),
        ("double[]", "[D"),
        ("int[][]", "[[I"),
        ("java.lang.String[]", "[Ljava.lang.String;"),
        ("java.lang.String[][]", "[[Ljava.lang.String;"),
        ("int", "int"),
        ("java.lang.String", "java.lang.String"),
    ];

    for (literal, expected) in cases {
        let id = registry.for_name(literal).unwrap();

        assert_eq!(registry.binary_name(id), expected, "binary name of {literal}");
    }
}

#[test]
pub fn nesting() {
    let registry = common::registry();
    let int_array = registry.primitive_array(PrimitiveKind::Int);
    let int_matrix = registry.array_class_of(int_array);

    assert_eq!(registry.component_type(int_matrix), Some(int_array));
    assert_eq!(
        registry.component_type(int_array),
        Some(registry.primitive(PrimitiveKind::Int))
    );
    assert_eq!(registry.component_type(registry.primitive(PrimitiveKind::Int)), None);

    assert_eq!(registry.dimensions(int_matrix), 2);
    assert_eq!(registry.dimensions(int_array), 1);
    assert_eq!(registry.dimensions(registry.primitive(PrimitiveKind::Int)), 0);

    assert_eq!(
        registry.element_type(int_matrix),
        registry.primitive(PrimitiveKind::Int)
    );

    assert!(registry.is_array(int_matrix));
    assert!(!registry.is_array(registry.primitive(PrimitiveKind::Int)));
    assert!(!registry.is_array(registry.class_named("Dog")));
}

#[test]
pub fn descriptor_variants() {
    let registry = common::registry();
    let int = registry.primitive(PrimitiveKind::Int);
    let int_array = registry.array_class_of(int);

    let Descriptor::Primitive(primitive) = registry.descriptor(int) else {
        panic!("int is not a primitive descriptor");
    };
    assert!(std::ptr::eq(primitive, PrimitiveDescriptor::of(PrimitiveKind::Int)));

    let Descriptor::Array(array) = registry.descriptor(int_array) else {
        panic!("int[] is not an array descriptor");
    };
    assert_eq!(array.component(), int);
    assert_eq!(array.name(), "int[]");

    let Descriptor::Reference(reference) = registry.descriptor(registry.class_named("Dog")) else {
        panic!("Dog is not a reference descriptor");
    };
    assert_eq!(reference.name(), "Dog");
}

#[test]
pub fn default_values() {
    let registry = common::registry();

    let expected = [
        (PrimitiveKind::Boolean, DefaultValue::Boolean(false)),
        (PrimitiveKind::Char, DefaultValue::Char(0)),
        (PrimitiveKind::Byte, DefaultValue::Byte(0)),
        (PrimitiveKind::Short, DefaultValue::Short(0)),
        (PrimitiveKind::Int, DefaultValue::Int(0)),
        (PrimitiveKind::Long, DefaultValue::Long(0)),
        (PrimitiveKind::Float, DefaultValue::Float(0.0)),
        (PrimitiveKind::Double, DefaultValue::Double(0.0)),
    ];

    for (kind, value) in expected {
        let array = registry.primitive_array(kind);

        assert_eq!(registry.default_value(array), value, "default of {kind}[]");
        assert_eq!(registry.slot_default_value(array), Some(value), "slot of {kind}[]");
        assert_eq!(PrimitiveDescriptor::of(kind).default_value(), value);
    }
}

#[test]
pub fn default_values_follow_the_component_chain() {
    let registry = common::registry();
    let int_matrix = registry.for_name("int[][]").unwrap();
    let strings = registry.for_name("java.lang.String[]").unwrap();

    assert_eq!(registry.default_value(int_matrix), DefaultValue::Int(0));
    assert_eq!(registry.slot_default_value(int_matrix), Some(DefaultValue::Null));

    assert_eq!(registry.default_value(strings), DefaultValue::Null);
    assert_eq!(registry.slot_default_value(strings), Some(DefaultValue::Null));
}

#[test]
pub fn non_arrays_have_no_slots() {
    let registry = common::registry();

    for kind in PrimitiveKind::ALL {
        assert_eq!(registry.slot_default_value(registry.primitive(kind)), None);
    }
    assert_eq!(registry.slot_default_value(registry.class_named("Dog")), None);

    assert_eq!(
        registry.default_value(registry.primitive(PrimitiveKind::Int)),
        DefaultValue::Int(0)
    );
    assert_eq!(
        registry.default_value(registry.class_named("Dog")),
        DefaultValue::Null
    );
}

#[test]
pub fn default_value_display() {
    assert_eq!(DefaultValue::Boolean(false).to_string(), "false");
    assert_eq!(DefaultValue::Char(0).to_string(), "'\\u0000'");
    assert_eq!(DefaultValue::Long(0).to_string(), "0L");
    assert_eq!(DefaultValue::Float(0.0).to_string(), "0.0f");
    assert_eq!(DefaultValue::Double(0.0).to_string(), "0.0");
    assert_eq!(DefaultValue::Null.to_string(), "null");
}

#[test]
pub fn closed_primitive_set() {
    assert_eq!(PrimitiveKind::ALL.len(), 8);

    let names = PrimitiveKind::ALL
        .iter()
        .map(|kind| PrimitiveDescriptor::of(*kind).name())
        .collect::<HashSet<_>>();
    assert_eq!(
        names,
        HashSet::from(["boolean", "char", "byte", "short", "int", "long", "float", "double"])
    );

    for kind in PrimitiveKind::ALL {
        let descriptor = PrimitiveDescriptor::of(kind);

        assert!(std::ptr::eq(descriptor, PrimitiveDescriptor::of(kind)));
        assert_eq!(descriptor.kind(), kind);
        assert_eq!(PrimitiveKind::from_name(descriptor.name()), Some(kind));
    }

    assert_eq!(PrimitiveKind::from_name("void"), None);
    assert_eq!(PrimitiveKind::from_name("Integer"), None);
}

#[test]
pub fn widths() {
    let widths = PrimitiveKind::ALL.map(|kind| PrimitiveDescriptor::of(kind).width());

    assert_eq!(widths, [1, 2, 1, 2, 4, 8, 4, 8]);
}
