use typedesc::{PrimitiveKind, TypeName};

mod common;

fn assignable(from: &str, to: &str) -> bool {
    let registry = common::registry();
    let hierarchy = common::animals();

    registry.is_assignable(
        registry.for_name(from).unwrap(),
        registry.for_name(to).unwrap(),
        &hierarchy,
    )
}

#[test]
pub fn primitive_arrays_are_invariant() {
    assert!(assignable("int[]", "int[]"));
    assert!(!assignable("int[]", "long[]"));
    assert!(!assignable("long[]", "int[]"));
    assert!(!assignable("byte[]", "short[]"));
    assert!(!assignable("int[]", "java.lang.Object[]"));
    assert!(!assignable("int[][]", "long[][]"));
}

#[test]
pub fn every_pair_of_distinct_primitive_arrays_is_rejected() {
    let registry = common::registry();
    let hierarchy = common::animals();

    for from in PrimitiveKind::ALL {
        for to in PrimitiveKind::ALL {
            assert_eq!(
                registry.is_assignable(
                    registry.primitive_array(from),
                    registry.primitive_array(to),
                    &hierarchy,
                ),
                from == to,
                "{from}[] to {to}[]"
            );
        }
    }
}

#[test]
pub fn primitives_are_only_assignable_to_themselves() {
    assert!(assignable("int", "int"));
    assert!(!assignable("int", "long"));
    assert!(!assignable("int", "java.lang.Object"));
    assert!(!assignable("int", "int[]"));
}

#[test]
pub fn reference_arrays_are_covariant() {
    assert!(assignable("Dog[]", "Animal[]"));
    assert!(!assignable("Animal[]", "Dog[]"));
    assert!(!assignable("Dog[]", "Cat[]"));
    assert!(assignable("Dog[]", "Named[]"));
    assert!(assignable("Dog[]", "java.lang.Object[]"));
}

#[test]
pub fn multi_dimensional_arrays_use_the_same_rule() {
    assert!(assignable("Dog[][]", "Animal[][]"));
    assert!(!assignable("Animal[][]", "Dog[][]"));
    assert!(assignable("Dog[][]", "java.lang.Object[][]"));
    assert!(assignable("Dog[][]", "java.lang.Object[]"));
    assert!(assignable("int[][]", "java.lang.Object[]"));
    assert!(!assignable("Dog[]", "Animal[][]"));
    assert!(!assignable("Dog[][]", "Animal[]"));
}

#[test]
pub fn arrays_are_objects() {
    assert!(assignable("int[]", "java.lang.Object"));
    assert!(assignable("Dog[][]", "java.lang.Object"));
    assert!(assignable("long[]", "java.lang.Cloneable"));
    assert!(assignable("long[]", "java.io.Serializable"));
    assert!(!assignable("int[]", "Animal"));
    assert!(!assignable("java.lang.Object", "int[]"));
}

#[test]
pub fn references_delegate_to_the_hierarchy() {
    assert!(assignable("Dog", "Animal"));
    assert!(assignable("Dog", "java.lang.Object"));
    assert!(!assignable("Animal", "Dog"));
}

#[test]
pub fn closures_can_stand_in_for_a_hierarchy() {
    let registry = common::registry();
    let dog = registry.class_named("Dog");
    let animal = registry.class_named("Animal");
    let animal_name = TypeName::parse("Animal");

    let only_animals = |_: TypeName, sup: TypeName| sup == animal_name;

    assert!(registry.is_assignable(
        registry.array_class_of(dog),
        registry.array_class_of(animal),
        &only_animals,
    ));
    assert!(!registry.is_assignable(
        registry.array_class_of(animal),
        registry.array_class_of(dog),
        &only_animals,
    ));
}
