#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use uuid::Uuid;

use super::*;

fn pill_at(x: f64, y: f64, w: f64, h: f64, z: i64) -> Pill {
    Pill {
        id: Uuid::new_v4(),
        x,
        y,
        width: w,
        height: h,
        color: "#3A7CA5".to_owned(),
        stack_order: z,
        radii: CornerRadii::uniform(20.0),
    }
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

// =============================================================
// CornerRadii
// =============================================================

#[test]
fn uniform_sets_all_corners() {
    let r = CornerRadii::uniform(12.5);
    assert_eq!(r.top_left, 12.5);
    assert_eq!(r.top_right, 12.5);
    assert_eq!(r.bottom_left, 12.5);
    assert_eq!(r.bottom_right, 12.5);
}

// =============================================================
// Pill::fragment
// =============================================================

#[test]
fn fragment_inherits_color_and_stack_order() {
    let parent = pill_at(0.0, 0.0, 100.0, 80.0, 4);
    let child = parent.fragment(0.0, 0.0, 50.0, 80.0, CornerRadii::uniform(0.0));
    assert_eq!(child.color, parent.color);
    assert_eq!(child.stack_order, 4);
    assert_eq!((child.width, child.height), (50.0, 80.0));
}

#[test]
fn fragment_gets_fresh_id() {
    let parent = pill_at(0.0, 0.0, 100.0, 80.0, 1);
    let a = parent.fragment(0.0, 0.0, 50.0, 80.0, CornerRadii::uniform(0.0));
    let b = parent.fragment(50.0, 0.0, 50.0, 80.0, CornerRadii::uniform(0.0));
    assert_ne!(a.id, parent.id);
    assert_ne!(b.id, parent.id);
    assert_ne!(a.id, b.id);
}

// =============================================================
// ShapeRegistry: add / get / len
// =============================================================

#[test]
fn new_registry_is_empty() {
    let registry = ShapeRegistry::new();
    assert!(registry.is_empty());
    assert_eq!(registry.len(), 0);
    assert!(registry.pills().is_empty());
}

#[test]
fn add_and_get() {
    let mut registry = ShapeRegistry::new();
    let pill = pill_at(0.0, 0.0, 40.0, 40.0, 1);
    let id = pill.id;
    registry.add(pill);
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.get(&id).map(|p| p.id), Some(id));
}

#[test]
fn get_unknown_id_returns_none() {
    let registry = ShapeRegistry::new();
    assert!(registry.get(&Uuid::new_v4()).is_none());
}

#[test]
fn add_preserves_insertion_order() {
    let mut registry = ShapeRegistry::new();
    let a = pill_at(0.0, 0.0, 40.0, 40.0, 3);
    let b = pill_at(100.0, 0.0, 40.0, 40.0, 1);
    let (id_a, id_b) = (a.id, b.id);
    registry.add(a);
    registry.add(b);
    let ids: Vec<ShapeId> = registry.pills().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![id_a, id_b]);
}

// =============================================================
// ShapeRegistry: stack counter
// =============================================================

#[test]
fn stack_orders_start_at_one_and_increase() {
    let mut registry = ShapeRegistry::new();
    assert_eq!(registry.next_stack_order(), 1);
    assert_eq!(registry.next_stack_order(), 2);
    assert_eq!(registry.next_stack_order(), 3);
}

#[test]
fn bring_to_front_assigns_next_order() {
    let mut registry = ShapeRegistry::new();
    let a = pill_at(0.0, 0.0, 40.0, 40.0, 1);
    let b = pill_at(100.0, 0.0, 40.0, 40.0, 2);
    let id_a = a.id;
    registry.add(a);
    registry.add(b);
    let snapshot = registry_snapshot(&registry);
    registry.replace_all(snapshot); // seed counter to 2

    assert_eq!(registry.bring_to_front(&id_a), Some(3));
    assert_eq!(registry.get(&id_a).map(|p| p.stack_order), Some(3));
}

#[test]
fn bring_to_front_unknown_id_leaves_counter_alone() {
    let mut registry = ShapeRegistry::new();
    registry.add(pill_at(0.0, 0.0, 40.0, 40.0, 1));
    assert_eq!(registry.bring_to_front(&Uuid::new_v4()), None);
    assert_eq!(registry.next_stack_order(), 1);
}

#[test]
fn replace_all_raises_counter_to_cover_loaded_orders() {
    let mut registry = ShapeRegistry::new();
    registry.replace_all(vec![pill_at(0.0, 0.0, 40.0, 40.0, 5)]);
    assert_eq!(registry.next_stack_order(), 6);
}

#[test]
fn replace_all_never_lowers_counter() {
    let mut registry = ShapeRegistry::new();
    for _ in 0..4 {
        registry.next_stack_order();
    }
    registry.replace_all(vec![pill_at(0.0, 0.0, 40.0, 40.0, 1)]);
    assert_eq!(registry.next_stack_order(), 5);
}

#[test]
fn take_pills_empties_without_touching_counter() {
    let mut registry = ShapeRegistry::new();
    registry.add(pill_at(0.0, 0.0, 40.0, 40.0, 1));
    registry.add(pill_at(100.0, 0.0, 40.0, 40.0, 2));
    let snapshot = registry_snapshot(&registry);
    registry.replace_all(snapshot);

    let taken = registry.take_pills();
    assert_eq!(taken.len(), 2);
    assert!(registry.is_empty());
    assert_eq!(registry.next_stack_order(), 3);
}

// =============================================================
// ShapeRegistry: hit_test
// =============================================================

#[test]
fn hit_test_misses_empty_registry() {
    let registry = ShapeRegistry::new();
    assert!(registry.hit_test(pt(10.0, 10.0)).is_none());
}

#[test]
fn hit_test_finds_containing_pill() {
    let mut registry = ShapeRegistry::new();
    let pill = pill_at(10.0, 10.0, 40.0, 40.0, 1);
    let id = pill.id;
    registry.add(pill);
    assert_eq!(registry.hit_test(pt(30.0, 30.0)).map(|p| p.id), Some(id));
    assert!(registry.hit_test(pt(100.0, 100.0)).is_none());
}

#[test]
fn hit_test_edges_are_inclusive() {
    let mut registry = ShapeRegistry::new();
    registry.add(pill_at(10.0, 10.0, 40.0, 40.0, 1));
    assert!(registry.hit_test(pt(10.0, 10.0)).is_some());
    assert!(registry.hit_test(pt(50.0, 50.0)).is_some());
}

#[test]
fn hit_test_picks_topmost_of_overlapping() {
    let mut registry = ShapeRegistry::new();
    let below = pill_at(0.0, 0.0, 100.0, 100.0, 1);
    let above = pill_at(50.0, 50.0, 100.0, 100.0, 2);
    let above_id = above.id;
    registry.add(below);
    registry.add(above);
    // The overlap region belongs to the higher stack order.
    assert_eq!(registry.hit_test(pt(75.0, 75.0)).map(|p| p.id), Some(above_id));
}

#[test]
fn hit_test_ignores_insertion_order() {
    let mut registry = ShapeRegistry::new();
    let above = pill_at(0.0, 0.0, 100.0, 100.0, 9);
    let below = pill_at(0.0, 0.0, 100.0, 100.0, 2);
    let above_id = above.id;
    registry.add(above);
    registry.add(below);
    assert_eq!(registry.hit_test(pt(50.0, 50.0)).map(|p| p.id), Some(above_id));
}

// =============================================================
// ShapeRegistry: translate
// =============================================================

#[test]
fn translate_offsets_position_only() {
    let mut registry = ShapeRegistry::new();
    let pill = pill_at(10.0, 20.0, 40.0, 50.0, 1);
    let id = pill.id;
    registry.add(pill);

    assert!(registry.translate(&id, 5.0, -3.0));
    let moved = registry.get(&id).map(|p| (p.x, p.y, p.width, p.height));
    assert_eq!(moved, Some((15.0, 17.0, 40.0, 50.0)));
}

#[test]
fn translate_unknown_id_returns_false() {
    let mut registry = ShapeRegistry::new();
    assert!(!registry.translate(&Uuid::new_v4(), 5.0, 5.0));
}

// =============================================================
// ShapeRegistry: sorted_pills
// =============================================================

#[test]
fn sorted_pills_ascending_by_stack_order() {
    let mut registry = ShapeRegistry::new();
    registry.add(pill_at(0.0, 0.0, 40.0, 40.0, 3));
    registry.add(pill_at(0.0, 0.0, 40.0, 40.0, 1));
    registry.add(pill_at(0.0, 0.0, 40.0, 40.0, 2));

    let orders: Vec<i64> = registry.sorted_pills().iter().map(|p| p.stack_order).collect();
    assert_eq!(orders, vec![1, 2, 3]);
}

#[test]
fn sorted_pills_does_not_disturb_insertion_order() {
    let mut registry = ShapeRegistry::new();
    let a = pill_at(0.0, 0.0, 40.0, 40.0, 2);
    let b = pill_at(0.0, 0.0, 40.0, 40.0, 1);
    let (id_a, id_b) = (a.id, b.id);
    registry.add(a);
    registry.add(b);

    assert_eq!(registry.sorted_pills()[0].id, id_b);
    let ids: Vec<ShapeId> = registry.pills().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![id_a, id_b]);
}

// =============================================================
// Pill serde
// =============================================================

#[test]
fn pill_serde_roundtrip() {
    let pill = pill_at(10.0, 20.0, 60.0, 40.0, 3);
    let json = serde_json::to_string(&pill).unwrap();
    let back: Pill = serde_json::from_str(&json).unwrap();
    assert_eq!(back.id, pill.id);
    assert_eq!((back.x, back.y, back.width, back.height), (10.0, 20.0, 60.0, 40.0));
    assert_eq!(back.color, pill.color);
    assert_eq!(back.stack_order, 3);
    assert_eq!(back.radii, pill.radii);
}

// =============================================================
// Helpers
// =============================================================

fn registry_snapshot(registry: &ShapeRegistry) -> Vec<Pill> {
    registry.pills().to_vec()
}
