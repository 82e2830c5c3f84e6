//! Resize engine behavior: per-handle policies, modifiers, clamps.
//!
//! The base box is 100x50 at the origin, zoom 1.0, so the handle size is
//! 5, the minimum dimension 10, and the clamp padding 9. All expected
//! values are exactly representable.

use underlay::{DragSnapshot, HandleKind, PointerModifiers, Rect, resize_bounds};

const BASE: Rect = Rect {
    x: 0.0,
    y: 0.0,
    width: 100.0,
    height: 50.0,
};

const NONE: PointerModifiers = PointerModifiers {
    ctrl: false,
    shift: false,
};
const CTRL: PointerModifiers = PointerModifiers {
    ctrl: true,
    shift: false,
};
const SHIFT: PointerModifiers = PointerModifiers {
    ctrl: false,
    shift: true,
};

fn apply(kind: HandleKind, dx: f64, dy: f64, modifiers: PointerModifiers) -> Rect {
    let mut bounds = BASE;
    let mut snapshot = DragSnapshot::capture(&BASE, modifiers);
    resize_bounds(kind, &mut bounds, dx, dy, modifiers, &mut snapshot, 1.0);
    bounds
}

#[test]
fn bottom_right_grows_both_dimensions() {
    assert_eq!(
        apply(HandleKind::BottomRight, 20.0, 10.0, NONE),
        Rect::new(0.0, 0.0, 120.0, 60.0)
    );
}

#[test]
fn top_left_moves_the_origin_and_shrinks() {
    assert_eq!(
        apply(HandleKind::TopLeft, 10.0, 5.0, NONE),
        Rect::new(10.0, 5.0, 90.0, 45.0)
    );
}

#[test]
fn aspect_lock_follows_the_dominant_component() {
    // dx dominates: dy is derived from it through the 2:1 ratio.
    assert_eq!(
        apply(HandleKind::BottomRight, 20.0, 10.0, CTRL),
        Rect::new(0.0, 0.0, 120.0, 60.0)
    );
    // dy dominates: dx is derived instead.
    assert_eq!(
        apply(HandleKind::BottomRight, 10.0, 30.0, CTRL),
        Rect::new(0.0, 0.0, 160.0, 80.0)
    );
    // Negative deltas pick the most negative component.
    assert_eq!(
        apply(HandleKind::BottomRight, -20.0, -4.0, CTRL),
        Rect::new(0.0, 0.0, 80.0, 40.0)
    );
}

#[test]
fn aspect_lock_with_divergent_pull_keeps_the_ratio() {
    let out = apply(HandleKind::BottomRight, 20.0, 10.0, CTRL);
    assert_eq!(out.width / out.height, 2.0);
    let out = apply(HandleKind::BottomRight, 5.0, 40.0, CTRL);
    assert_eq!(out.width / out.height, 2.0);
}

#[test]
fn axis_lock_resizes_symmetrically_about_the_center() {
    // Shrinking from the top-left keeps the center at (50, 25).
    let out = apply(HandleKind::TopLeft, 10.0, 5.0, SHIFT);
    assert_eq!(out, Rect::new(10.0, 5.0, 80.0, 40.0));
    assert_eq!(out.center(), underlay::point(50.0, 25.0));

    // Growing from the bottom-right does too.
    let out = apply(HandleKind::BottomRight, 20.0, 10.0, SHIFT);
    assert_eq!(out, Rect::new(-10.0, -5.0, 120.0, 60.0));
    assert_eq!(out.center(), underlay::point(50.0, 25.0));

    // Edge handles double along their axis only.
    let out = apply(HandleKind::MiddleRight, 10.0, 0.0, SHIFT);
    assert_eq!(out, Rect::new(-10.0, 0.0, 120.0, 50.0));
}

#[test]
fn dimensions_never_collapse_below_the_minimum() {
    assert_eq!(
        apply(HandleKind::BottomRight, -200.0, -100.0, NONE),
        Rect::new(0.0, 0.0, 10.0, 10.0)
    );
}

#[test]
fn top_left_overshoot_is_clamped_at_the_opposite_corner() {
    // Dragging far past the bottom-right pins the box just inside the
    // snapshot's bottom-right anchor, padding included.
    assert_eq!(
        apply(HandleKind::TopLeft, 200.0, 200.0, NONE),
        Rect::new(88.5, 38.5, 10.0, 10.0)
    );
}

#[test]
fn top_middle_grows_upward_keeping_the_bottom_edge() {
    let out = apply(HandleKind::TopMiddle, 0.0, -20.0, NONE);
    assert_eq!(out, Rect::new(0.0, -20.0, 100.0, 70.0));
    assert_eq!(out.y + out.height, 50.0);
}

#[test]
fn top_middle_collapse_snaps_near_the_bottom_edge() {
    // Crossing the minimum re-anchors y at the bottom-middle limit minus
    // the padding, slightly short of the original bottom edge.
    assert_eq!(
        apply(HandleKind::TopMiddle, 0.0, 45.0, NONE),
        Rect::new(0.0, 38.5, 100.0, 10.0)
    );
}

#[test]
fn middle_left_drags_the_left_edge_only() {
    assert_eq!(
        apply(HandleKind::MiddleLeft, -10.0, 0.0, NONE),
        Rect::new(-10.0, 0.0, 110.0, 50.0)
    );
}

#[test]
fn middle_right_with_aspect_lock_rebalances_both_axes() {
    // Width grows by dx; height follows through the inverse ratio, split
    // evenly above and below.
    assert_eq!(
        apply(HandleKind::MiddleRight, 10.0, 0.0, CTRL),
        Rect::new(0.0, -2.5, 110.0, 55.0)
    );
}

#[test]
fn modifier_toggle_rebases_the_snapshot() {
    let mut bounds = BASE;
    let mut snapshot = DragSnapshot::capture(&BASE, NONE);

    resize_bounds(
        HandleKind::BottomRight,
        &mut bounds,
        20.0,
        10.0,
        NONE,
        &mut snapshot,
        1.0,
    );
    assert_eq!(bounds, Rect::new(0.0, 0.0, 120.0, 60.0));
    assert_eq!(snapshot.width, 100.0);

    // Ctrl goes down: the snapshot refreshes to the live bounds, and the
    // aspect ratio locks to the box as it stands now.
    resize_bounds(
        HandleKind::BottomRight,
        &mut bounds,
        10.0,
        0.0,
        CTRL,
        &mut snapshot,
        1.0,
    );
    assert_eq!(snapshot.width, 120.0);
    assert_eq!(snapshot.height, 60.0);
    assert!(snapshot.ctrl);
    assert_eq!(bounds, Rect::new(0.0, 0.0, 130.0, 65.0));
}

#[test]
fn modifier_flip_matches_a_split_gesture() {
    // Continuous: one capture, ctrl pressed before the second step.
    let mut continuous = BASE;
    let mut snapshot = DragSnapshot::capture(&BASE, NONE);
    resize_bounds(
        HandleKind::BottomRight,
        &mut continuous,
        20.0,
        10.0,
        NONE,
        &mut snapshot,
        1.0,
    );
    resize_bounds(
        HandleKind::BottomRight,
        &mut continuous,
        10.0,
        0.0,
        CTRL,
        &mut snapshot,
        1.0,
    );

    // Split: release and re-grab with ctrl at the same pointer position.
    let mut split = BASE;
    let mut first = DragSnapshot::capture(&BASE, NONE);
    resize_bounds(
        HandleKind::BottomRight,
        &mut split,
        20.0,
        10.0,
        NONE,
        &mut first,
        1.0,
    );
    let mut second = DragSnapshot::capture(&split, CTRL);
    resize_bounds(
        HandleKind::BottomRight,
        &mut split,
        10.0,
        0.0,
        CTRL,
        &mut second,
        1.0,
    );

    assert_eq!(continuous, split);
}

#[test]
fn zoomed_out_view_raises_the_minimum() {
    // At zoom 0.5 the handle is 10 model units, so the floor is 20.
    let mut bounds = BASE;
    let mut snapshot = DragSnapshot::capture(&BASE, NONE);
    resize_bounds(
        HandleKind::BottomRight,
        &mut bounds,
        -500.0,
        -500.0,
        NONE,
        &mut snapshot,
        0.5,
    );
    assert_eq!(bounds.width, 20.0);
    assert_eq!(bounds.height, 20.0);
}

#[test]
fn collapse_clamp_holds_for_every_handle_and_modifier() {
    let combos = [
        NONE,
        CTRL,
        SHIFT,
        PointerModifiers {
            ctrl: true,
            shift: true,
        },
    ];
    let deltas = [
        (-200.0, -200.0),
        (200.0, 200.0),
        (-200.0, 200.0),
        (200.0, -200.0),
    ];
    for kind in HandleKind::ALL {
        for modifiers in combos {
            for (dx, dy) in deltas {
                let out = apply(kind, dx, dy, modifiers);
                assert!(
                    out.width >= 10.0 && out.height >= 10.0,
                    "{kind:?} {modifiers:?} ({dx}, {dy}) -> {out:?}"
                );
            }
        }
    }
}

#[test]
fn zero_delta_is_a_no_op() {
    for kind in HandleKind::ALL {
        assert_eq!(apply(kind, 0.0, 0.0, NONE), BASE, "{kind:?}");
    }
}
