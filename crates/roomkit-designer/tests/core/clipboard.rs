use roomkit_designer::{
    BuilderState, Door, ElementKind, ObjectCategory, PlacedObject, Point2D, Point3D, Wall,
    WallUpdate, PASTE_OFFSET,
};

fn state_with_room() -> BuilderState {
    let mut state = BuilderState::new();
    state.create_new_room("Clipboard");
    state
}

#[test]
fn test_paste_is_offset_and_independent() {
    let mut state = state_with_room();
    let source = state
        .add_wall(Wall::new(
            Point2D::new(1.0, 1.0),
            Point2D::new(3.0, 1.0),
            2.7,
            0.2,
        ))
        .unwrap();
    state.select_wall(Some(source));
    assert!(state.copy());

    let pasted = state.paste().unwrap();
    assert_ne!(pasted, source);
    assert_eq!(state.selection().primary(), Some((ElementKind::Wall, pasted)));

    let copy = state.current_room().unwrap().wall(pasted).unwrap().clone();
    assert_eq!(copy.start, Point2D::new(1.0 + PASTE_OFFSET, 1.0 + PASTE_OFFSET));
    assert_eq!(copy.end, Point2D::new(3.0 + PASTE_OFFSET, 1.0 + PASTE_OFFSET));

    state.update_wall(
        pasted,
        WallUpdate {
            height: Some(4.0),
            ..Default::default()
        },
    );
    let original = state.current_room().unwrap().wall(source).unwrap();
    assert_eq!(original.height, 2.7);
    assert_eq!(original.start, Point2D::new(1.0, 1.0));
}

#[test]
fn test_clipboard_holds_last_copy_only() {
    let mut state = state_with_room();
    let door = state
        .add_door(Door::new(Point3D::new(1.0, 0.0, 1.0), 0.0))
        .unwrap();
    let lamp = state
        .add_object(PlacedObject::new(
            "lamp",
            ObjectCategory::Electrical,
            Point3D::new(4.0, 0.0, 4.0),
        ))
        .unwrap();

    state.select_door(Some(door));
    state.copy();
    state.select_object(Some(lamp));
    state.copy();

    let doors_before = state.current_room().unwrap().doors.len();
    let pasted = state.paste().unwrap();
    let room = state.current_room().unwrap();
    assert_eq!(room.doors.len(), doors_before);
    let object = room.object(pasted).unwrap();
    assert_eq!(object.object_type, "lamp");
    assert_eq!(object.position, Point3D::new(4.5, 0.0, 4.5));
}

#[test]
fn test_repeated_paste_uses_same_offset() {
    let mut state = state_with_room();
    let door = state
        .add_door(Door::new(Point3D::new(0.0, 0.0, 0.0), 0.0))
        .unwrap();
    state.select_door(Some(door));
    state.copy();

    let a = state.paste().unwrap();
    let b = state.paste().unwrap();
    assert_ne!(a, b);
    let room = state.current_room().unwrap();
    assert_eq!(room.door(a).unwrap().position, room.door(b).unwrap().position);
}

#[test]
fn test_paste_without_copy_is_noop() {
    let mut state = state_with_room();
    assert!(!state.copy());
    assert!(state.paste().is_none());
    assert!(state.duplicate().is_none());
    assert!(state.current_room().unwrap().is_empty());
}

#[test]
fn test_duplicate_checkpoints() {
    let mut state = state_with_room();
    let id = state
        .add_object(PlacedObject::new(
            "desk",
            ObjectCategory::Furniture,
            Point3D::new(2.0, 0.0, 2.0),
        ))
        .unwrap();
    state.select_object(Some(id));
    let entries = state.history().len();

    let copy = state.duplicate().unwrap();
    assert_eq!(state.history().len(), entries + 1);
    assert_eq!(state.current_room().unwrap().objects.len(), 2);
    assert_eq!(state.selected_object().map(|o| o.id), Some(copy));

    assert!(state.undo());
    assert_eq!(state.current_room().unwrap().objects.len(), 1);
}
