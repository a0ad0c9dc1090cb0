//! End-to-end flows through the wheel picker's public API: the host wires a
//! scroll surface, forwards gesture events, and drives ticks, exactly as an
//! embedding would.

use std::cell::RefCell;
use std::rc::Rc;

use swivel_core::NoopHaptics;
use swivel_core::clock::{advance_test_now, clear_test_now, set_test_now};
use swivel_ui::wheel::{
    EXTERNAL_DEBOUNCE, RecordingSurface, TAP_SETTLE, WheelPickerProps, WheelPickerState, dispatch,
};
use web_time::{Duration, Instant};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

type Picker = Rc<RefCell<WheelPickerState<&'static str>>>;

fn minutes() -> Vec<&'static str> {
    // A realistic duration-picker dataset.
    ["5", "10", "15", "20", "25", "30", "45", "60"].to_vec()
}

fn build(initial: usize) -> (Picker, Rc<RecordingSurface>, Rc<RefCell<Vec<(String, usize)>>>) {
    let surface = RecordingSurface::new();
    let changes: Rc<RefCell<Vec<(String, usize)>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = changes.clone();
    let state = Rc::new(RefCell::new(WheelPickerState::new(
        WheelPickerProps {
            index: initial,
            data: minutes(),
            on_change: Rc::new(move |v: &&str, i| sink.borrow_mut().push((v.to_string(), i))),
            label: Some("min".into()),
            on_end_reached: None,
        },
        surface.clone(),
        Rc::new(NoopHaptics),
    )));
    (state, surface, changes)
}

#[test]
fn drag_then_tap_then_prop_change_keeps_one_source_of_truth() {
    init_logging();
    set_test_now(Instant::now());
    let (picker, surface, changes) = build(0);

    // User drags to the fourth row.
    dispatch(&picker, |s| s.handle_scroll_begin_drag());
    dispatch(&picker, |s| s.handle_scroll(100.0));
    dispatch(&picker, |s| s.handle_momentum_end(105.0));
    assert_eq!(picker.borrow().selected_index(), 3);

    // Then taps the sixth row and lets it settle.
    dispatch(&picker, |s| s.handle_item_press(5));
    advance_test_now(TAP_SETTLE);
    dispatch(&picker, |s| s.tick());
    assert_eq!(picker.borrow().selected_index(), 5);

    // Then the app pushes index 1 back in.
    dispatch(&picker, |s| s.set_index(1));
    advance_test_now(EXTERNAL_DEBOUNCE);
    dispatch(&picker, |s| s.tick());
    assert_eq!(picker.borrow().selected_index(), 1);

    assert_eq!(
        *changes.borrow(),
        vec![
            ("20".to_string(), 3),
            ("30".to_string(), 5),
            ("10".to_string(), 1),
        ]
    );

    // Every selection change produced exactly one scroll command after the
    // mount positioning; user settles command nothing.
    let cmds = surface.commands.borrow();
    assert_eq!(cmds.len(), 3);
    assert_eq!(cmds[0], (0.0, false));
    assert_eq!(cmds[1], (175.0, true));
    assert_eq!(cmds[2], (35.0, true));
    clear_test_now();
}

#[test]
fn rapid_prop_churn_lands_on_the_last_value_only() {
    init_logging();
    set_test_now(Instant::now());
    let (picker, _, changes) = build(0);

    for target in [7, 2, 4, 6] {
        dispatch(&picker, |s| s.set_index(target));
        advance_test_now(Duration::from_millis(50));
        dispatch(&picker, |s| s.tick());
    }
    advance_test_now(EXTERNAL_DEBOUNCE);
    dispatch(&picker, |s| s.tick());

    assert_eq!(picker.borrow().selected_index(), 6);
    assert_eq!(*changes.borrow(), vec![("45".to_string(), 6)]);
    clear_test_now();
}

#[test]
fn dataset_swap_mid_interaction_stays_in_bounds() {
    init_logging();
    set_test_now(Instant::now());
    let (picker, _, changes) = build(7);

    dispatch(&picker, |s| s.set_data(vec!["5", "10", "15"]));
    assert_eq!(picker.borrow().selected_index(), 2);
    assert_eq!(*changes.borrow(), vec![("15".to_string(), 2)]);

    // Interaction continues against the new bounds.
    dispatch(&picker, |s| s.handle_scroll_begin_drag());
    dispatch(&picker, |s| s.handle_momentum_end(1000.0));
    assert_eq!(picker.borrow().selected_index(), 2);
    assert_eq!(changes.borrow().len(), 1);
    clear_test_now();
}
