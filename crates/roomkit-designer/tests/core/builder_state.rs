use roomkit_designer::{
    BuilderState, Door, DoorUpdate, ElementKind, ObjectCategory, ObjectUpdate, PlacedObject,
    Point2D, Point3D, SelectedElement, Tool, Wall, WallUpdate, Window, WindowUpdate,
};

fn near(a: Point2D, b: Point2D) -> bool {
    (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
}

fn wall(x1: f64, y1: f64, x2: f64, y2: f64) -> Wall {
    Wall::new(Point2D::new(x1, y1), Point2D::new(x2, y2), 2.7, 0.2)
}

#[test]
fn test_draw_select_delete_undo_scenario() {
    let mut state = BuilderState::new();
    state.create_new_room("Scenario");

    state.set_tool(Tool::Wall);
    state.pointer_down(Point2D::new(0.0, 0.0));
    state.pointer_move(Point2D::new(5.0, 0.0));
    state.pointer_down(Point2D::new(5.0, 0.0));
    state.pointer_move(Point2D::new(5.0, 4.0));
    state.pointer_down(Point2D::new(5.0, 4.0));
    assert_eq!(state.current_room().unwrap().walls.len(), 2);

    state.set_tool(Tool::Select);
    assert!(state.tool_state().is_idle());

    state.pointer_down(Point2D::new(2.5, 0.05));
    let first = state.current_room().unwrap().walls[0].id;
    assert_eq!(state.selection().primary(), Some((ElementKind::Wall, first)));

    assert_eq!(state.delete_selected(), 1);
    let room = state.current_room().unwrap();
    assert_eq!(room.walls.len(), 1);
    assert!(near(room.walls[0].start, Point2D::new(5.0, 0.0)));
    assert!(near(room.walls[0].end, Point2D::new(5.0, 4.0)));
    assert!(state.selected_element().is_none());

    assert!(state.undo());
    assert_eq!(state.current_room().unwrap().walls.len(), 2);
}

#[test]
fn test_locked_elements_are_immutable() {
    let mut state = BuilderState::new();
    state.create_new_room("Locked");
    let wall_id = state.add_wall(wall(0.0, 0.0, 4.0, 0.0)).unwrap();
    let door_id = state.add_door(Door::new(Point3D::new(1.0, 0.0, 0.0), 0.0)).unwrap();
    let window_id = state
        .add_window(Window::new(Point3D::new(3.0, 1.2, 0.0), 0.0))
        .unwrap();
    let object_id = state
        .add_object(PlacedObject::new(
            "bed",
            ObjectCategory::Furniture,
            Point3D::new(2.0, 0.0, 2.0),
        ))
        .unwrap();

    for id in [wall_id, door_id, window_id, object_id] {
        state.set_locked(id, true);
    }
    let before = state.current_room().unwrap().clone();

    assert!(!state.update_wall(
        wall_id,
        WallUpdate {
            thickness: Some(0.5),
            ..Default::default()
        }
    ));
    assert!(!state.update_door(
        door_id,
        DoorUpdate {
            width: Some(2.0),
            ..Default::default()
        }
    ));
    assert!(!state.update_window(
        window_id,
        WindowUpdate {
            height: Some(2.0),
            ..Default::default()
        }
    ));
    assert!(!state.update_object(
        object_id,
        ObjectUpdate {
            position: Some(Point3D::new(9.0, 0.0, 9.0)),
            ..Default::default()
        }
    ));
    assert!(!state.remove_wall(wall_id));
    assert!(!state.remove_door(door_id));
    assert!(!state.remove_window(window_id));
    assert!(!state.remove_object(object_id));

    assert_eq!(state.current_room().unwrap(), &before);

    state.select_all();
    assert_eq!(state.delete_selected(), 0);
    assert_eq!(state.current_room().unwrap(), &before);
}

#[test]
fn test_delete_selected_skips_locked() {
    let mut state = BuilderState::new();
    state.create_new_room("Mixed");
    let keep = state.add_wall(wall(0.0, 0.0, 4.0, 0.0)).unwrap();
    let drop = state.add_wall(wall(4.0, 0.0, 4.0, 3.0)).unwrap();
    state.toggle_lock(keep);
    state.select_all();
    let entries = state.history().len();

    assert_eq!(state.delete_selected(), 1);
    assert_eq!(state.history().len(), entries + 1);
    let room = state.current_room().unwrap();
    assert!(room.wall(keep).is_some());
    assert!(room.wall(drop).is_none());
    assert_eq!(state.selected_elements(), &[keep]);
}

#[test]
fn test_selected_element_sum_type() {
    let mut state = BuilderState::new();
    state.create_new_room("Select");
    let object_id = state
        .add_object(PlacedObject::new(
            "plant",
            ObjectCategory::Decoration,
            Point3D::new(1.0, 0.0, 1.0),
        ))
        .unwrap();

    state.select_object(Some(object_id));
    match state.selected_element() {
        Some(SelectedElement::Object(object)) => assert_eq!(object.object_type, "plant"),
        other => panic!("unexpected selection: {other:?}"),
    }
    assert!(state.selected_wall().is_none());
    assert!(state.selected_object().is_some());

    state.select_wall(None);
    assert!(state.selected_object().is_some());
    state.clear_selection();
    assert!(state.selected_element().is_none());
}

#[test]
fn test_removal_clears_primary_selection() {
    let mut state = BuilderState::new();
    state.create_new_room("Remove");
    let id = state.add_wall(wall(0.0, 0.0, 2.0, 0.0)).unwrap();
    state.select_wall(Some(id));
    state.add_to_selection(id);

    assert!(state.remove_wall(id));
    assert!(state.selection().primary().is_none());
    assert!(state.selected_elements().is_empty());
}

#[test]
fn test_room_surfaces() {
    let mut state = BuilderState::new();
    state.create_new_room("Surfaces");
    assert_eq!(state.current_room().unwrap().ceiling.height, 2.7);
    assert!(state.set_ceiling_height(3.2));
    assert!(!state.set_ceiling_height(-1.0));
    assert!(state.set_floor_material(Some(roomkit_designer::Material::new("Tile", "#dddddd"))));

    let room = state.current_room().unwrap();
    assert_eq!(room.ceiling.height, 3.2);
    assert_eq!(room.floor.material.as_ref().unwrap().name, "Tile");
}

#[test]
fn test_reset_keeps_preferences() {
    let mut state = BuilderState::new();
    state.set_grid_size(0.5);
    state.create_new_room("Reset");
    state.add_wall(wall(0.0, 0.0, 2.0, 0.0));

    state.reset();
    assert!(state.current_room().is_none());
    assert!(!state.can_undo());
    assert_eq!(state.preferences.grid_size, 0.5);
}

#[test]
fn test_room_queries() {
    let mut state = BuilderState::new();
    state.create_new_room("Queries");
    for w in [
        wall(0.0, 0.0, 4.0, 0.0),
        wall(4.0, 0.0, 4.0, 3.0),
        wall(4.0, 3.0, 0.0, 3.0),
        wall(0.0, 3.0, 0.0, 0.0),
    ] {
        state.add_wall(w);
    }
    assert!((state.calculate_room_area() - 12.0).abs() < 1e-9);
    assert!((state.calculate_room_perimeter() - 14.0).abs() < 1e-9);
}
