use roomkit_designer::{
    BuilderState, Door, ElementKind, ObjectCategory, Point2D, Point3D, Tool, ToolState, Wall,
    MIN_WALL_LENGTH,
};

fn state_with_room() -> BuilderState {
    let mut state = BuilderState::new();
    state.create_new_room("Tools");
    state
}

fn add_wall(state: &mut BuilderState, x1: f64, y1: f64, x2: f64, y2: f64) {
    state.add_wall(Wall::new(Point2D::new(x1, y1), Point2D::new(x2, y2), 2.7, 0.2));
}

#[test]
fn test_short_wall_leaves_room_unchanged() {
    let mut state = state_with_room();
    state.set_snap_to_grid(false);
    state.set_tool(Tool::Wall);
    state.pointer_down(Point2D::new(1.0, 1.0));
    state.pointer_down(Point2D::new(1.0 + MIN_WALL_LENGTH / 2.0, 1.0));

    assert!(state.current_room().unwrap().walls.is_empty());
    assert!(state.tool_state().temp_wall().is_none());
}

#[test]
fn test_unsnapped_wall_just_under_minimum_is_discarded() {
    let mut state = state_with_room();
    state.set_snap_to_grid(false);
    state.start_drawing_wall(Point2D::new(0.0, 0.0));
    state.update_temp_wall(Point2D::new(MIN_WALL_LENGTH - 1e-10, 0.0));

    assert!(state.finish_drawing_wall().is_none());
    assert!(state.current_room().unwrap().walls.is_empty());
}

#[test]
fn test_snapped_wall_at_minimum_is_kept() {
    let mut state = state_with_room();
    state.set_grid_size(MIN_WALL_LENGTH);
    state.start_drawing_wall(Point2D::new(0.72, 0.31));
    state.update_temp_wall(Point2D::new(0.79, 0.31));

    assert!(state.finish_drawing_wall().is_some());
    assert_eq!(state.current_room().unwrap().walls.len(), 1);
}

#[test]
fn test_wall_uses_preference_dimensions() {
    let mut state = state_with_room();
    state.preferences.default_wall_height = 3.0;
    state.preferences.default_wall_thickness = 0.3;
    state.start_drawing_wall(Point2D::new(0.0, 0.0));
    state.update_temp_wall(Point2D::new(2.0, 0.0));
    state.finish_drawing_wall();

    let wall = &state.current_room().unwrap().walls[0];
    assert_eq!(wall.height, 3.0);
    assert_eq!(wall.thickness, 0.3);
}

#[test]
fn test_wall_points_snap_to_grid() {
    let mut state = state_with_room();
    state.set_grid_size(0.5);
    state.start_drawing_wall(Point2D::new(0.2, -0.1));
    state.pointer_move(Point2D::new(2.8, 0.1));
    assert_eq!(
        state.tool_state().temp_wall(),
        Some((Point2D::new(0.0, 0.0), Point2D::new(3.0, 0.0)))
    );
}

#[test]
fn test_tool_switch_cancels_every_draft() {
    let mut state = state_with_room();

    state.set_tool(Tool::Wall);
    state.pointer_down(Point2D::new(0.0, 0.0));
    assert!(!state.tool_state().is_idle());
    state.set_tool(Tool::Select);
    assert!(state.tool_state().is_idle());

    state.start_measurement(Point2D::new(0.0, 0.0));
    state.set_tool(Tool::Wall);
    assert!(state.tool_state().is_idle());

    state.start_placing_object("sofa", ObjectCategory::Furniture);
    state.set_tool(Tool::Door);
    assert!(state.tool_state().is_idle());
    assert_eq!(state.tool(), Tool::Door);
}

#[test]
fn test_object_placement_stays_in_mode() {
    let mut state = state_with_room();
    state.set_snap_to_grid(false);
    state.start_placing_object("chair", ObjectCategory::Furniture);
    assert_eq!(state.tool(), Tool::Object);

    state.pointer_move(Point2D::new(1.0, 2.0));
    match state.tool_state() {
        ToolState::PlacingObject { ghost, .. } => {
            assert_eq!(*ghost, Some(Point3D::new(1.0, 0.0, 2.0)))
        }
        other => panic!("unexpected state: {other:?}"),
    }

    state.pointer_down(Point2D::new(1.0, 2.0));
    state.pointer_down(Point2D::new(3.0, 2.0));
    let room = state.current_room().unwrap();
    assert_eq!(room.objects.len(), 2);
    assert_eq!(room.objects[1].position, Point3D::new(3.0, 0.0, 2.0));
    assert_eq!(room.objects[0].category, ObjectCategory::Furniture);
    assert!(matches!(state.tool_state(), ToolState::PlacingObject { .. }));

    state.cancel_placement();
    assert_eq!(state.tool(), Tool::Select);
    assert!(state.tool_state().is_idle());
}

#[test]
fn test_finish_placement_needs_ghost() {
    let mut state = state_with_room();
    state.start_placing_object("chair", ObjectCategory::Furniture);
    assert!(state.finish_placement().is_none());
}

#[test]
fn test_door_placement_on_wall() {
    let mut state = state_with_room();
    add_wall(&mut state, 0.0, 0.0, 4.0, 0.0);
    state.set_tool(Tool::Door);
    state.pointer_down(Point2D::new(1.5, 0.02));

    let room = state.current_room().unwrap();
    assert_eq!(room.doors.len(), 1);
    let door = &room.doors[0];
    assert_eq!(door.width, Door::DEFAULT_WIDTH);
    assert_eq!(door.height, Door::DEFAULT_HEIGHT);
    assert_eq!(door.position, Point3D::new(1.5, 0.0, 0.02));
    assert_eq!(door.wall_id, Some(room.walls[0].id));
    assert_eq!(door.rotation, 0.0);

    let opening = &room.walls[0].openings[0];
    assert_eq!(opening.id, door.id);
    assert!((opening.position - 1.5).abs() < 1e-9);
    assert!(state.can_undo());
}

#[test]
fn test_door_rejected_on_locked_wall() {
    let mut state = state_with_room();
    add_wall(&mut state, 0.0, 0.0, 4.0, 0.0);
    let wall_id = state.current_room().unwrap().walls[0].id;
    state.toggle_lock(wall_id);

    assert!(state.place_door(Point2D::new(2.0, 0.0)).is_none());
    assert!(state.current_room().unwrap().doors.is_empty());
}

#[test]
fn test_select_tool_hits_and_misses() {
    let mut state = state_with_room();
    add_wall(&mut state, 0.0, 0.0, 4.0, 0.0);
    let id = state.current_room().unwrap().walls[0].id;

    state.set_tool(Tool::Select);
    state.pointer_down(Point2D::new(2.0, 0.1));
    assert_eq!(state.selection().primary(), Some((ElementKind::Wall, id)));

    state.add_to_selection(id);
    state.pointer_down(Point2D::new(2.0, 3.0));
    assert!(state.selection().primary().is_none());
    assert!(state.selected_elements().is_empty());
}

#[test]
fn test_hidden_wall_not_selectable() {
    let mut state = state_with_room();
    add_wall(&mut state, 0.0, 0.0, 4.0, 0.0);
    let id = state.current_room().unwrap().walls[0].id;
    assert!(state.toggle_visibility(id));

    state.pointer_down(Point2D::new(2.0, 0.0));
    assert!(state.selection().primary().is_none());
}

#[test]
fn test_measurements_are_outside_history() {
    let mut state = state_with_room();
    let entries = state.history().len();
    state.set_tool(Tool::Measure);
    state.pointer_down(Point2D::new(0.0, 0.0));
    state.pointer_move(Point2D::new(2.0, 0.0));
    state.pointer_down(Point2D::new(2.0, 0.0));
    assert_eq!(state.measurements().len(), 1);
    assert_eq!(state.history().len(), entries);

    let id = state.measurements()[0].id;
    assert!(state.remove_measurement(id));
    assert!(!state.remove_measurement(id));

    state.pointer_down(Point2D::new(0.0, 0.0));
    state.pointer_down(Point2D::new(0.0, 1.0));
    state.clear_measurements();
    assert!(state.measurements().is_empty());
}

#[test]
fn test_zoom_is_clamped() {
    let mut state = BuilderState::new();
    state.set_zoom(100.0);
    assert_eq!(state.zoom(), 5.0);
    state.set_zoom(0.0);
    assert_eq!(state.zoom(), 0.2);
}
