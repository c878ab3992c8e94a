// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_clip_scene` crate.
//!
//! These exercise a `ClipSession` end to end: scene edits keep clip results
//! current, view input moves the camera without touching world data, and the
//! observer only hears about effective changes.

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Line, Point, Size};
use rand::SeedableRng;
use rand::rngs::StdRng;
use understory_clip::{ClipResult, ClipWindow};
use understory_clip_scene::{
    ClipSession, DrawOp, Endpoint, RandomConfig, SceneError, StateChange,
};

fn observed_session() -> (ClipSession, Rc<RefCell<Vec<StateChange>>>) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut session = ClipSession::new(Size::new(800.0, 600.0));
    let sink = Rc::clone(&log);
    session.set_observer(move |change: StateChange| sink.borrow_mut().push(change));
    (session, log)
}

#[test]
fn new_session_is_empty_with_default_view() {
    let session = ClipSession::new(Size::new(800.0, 600.0));
    assert!(session.scene().is_empty());
    assert_eq!(session.scene().window(), ClipWindow::default());
    assert_eq!(session.viewport().scale(), 20.0);
    assert_eq!(session.viewport().origin_on_screen(), Point::new(400.0, 300.0));
}

#[test]
fn editing_an_endpoint_reclips_the_segment() {
    let (mut session, log) = observed_session();
    let id = session.add_segment(Line::new((-8.0, 2.0), (-6.0, 2.0)));
    assert_eq!(session.scene().get(id).unwrap().result, ClipResult::Rejected);

    assert_eq!(
        session.set_endpoint(id, Endpoint::End, Point::new(8.0, 2.0)),
        Ok(true)
    );
    let visible = session.scene().get(id).unwrap().result.accepted().unwrap();
    assert_eq!(visible, Line::new((-5.0, 2.0), (5.0, 2.0)));

    // Same position again: nothing to do.
    assert_eq!(
        session.set_endpoint(id, Endpoint::End, Point::new(8.0, 2.0)),
        Ok(false)
    );
    assert_eq!(*log.borrow(), [StateChange::Scene, StateChange::Scene]);
}

#[test]
fn changing_the_window_reclips_every_segment() {
    let (mut session, _log) = observed_session();
    let a = session.add_segment(Line::new((6.0, 6.0), (9.0, 9.0)));
    let b = session.add_segment(Line::new((0.0, 0.0), (1.0, 1.0)));
    assert!(!session.scene().get(a).unwrap().result.is_accepted());
    assert!(session.scene().get(b).unwrap().result.is_accepted());

    assert_eq!(session.set_window_bounds(5.0, 5.0, 10.0, 10.0), Ok(true));
    assert_eq!(
        session.scene().get(a).unwrap().result,
        ClipResult::Accepted(Line::new((6.0, 6.0), (9.0, 9.0)))
    );
    assert!(!session.scene().get(b).unwrap().result.is_accepted());
}

#[test]
fn removed_ids_are_not_reused() {
    let (mut session, _log) = observed_session();
    let first = session.add_default_segment();
    let second = session.add_default_segment();
    assert_eq!(session.remove_segment(first), Ok(Line::new((0.0, 0.0), (1.0, 1.0))));
    assert_eq!(
        session.remove_segment(first),
        Err(SceneError::UnknownSegment(first))
    );
    let third = session.add_default_segment();
    assert_ne!(third, first);
    assert_eq!(session.scene().number_of(second), Some(1));
    assert_eq!(session.scene().number_of(third), Some(2));
}

#[test]
fn view_input_leaves_world_data_alone() {
    let (mut session, log) = observed_session();
    let id = session.add_segment(Line::new((-10.0, -10.0), (10.0, 10.0)));
    let before = *session.scene().get(id).unwrap();
    let revision = session.scene().revision();

    session.pointer_down(Point::new(200.0, 200.0));
    session.pointer_move(Point::new(260.0, 180.0));
    session.pointer_up();
    session.wheel(Point::new(100.0, 500.0), -1.0);
    session.set_scale(35.0);

    assert_eq!(*session.scene().get(id).unwrap(), before);
    assert_eq!(session.scene().revision(), revision);
    assert_eq!(
        *log.borrow(),
        [
            StateChange::Scene,
            StateChange::View,
            StateChange::View,
            StateChange::View,
        ]
    );
}

#[test]
fn wheel_zoom_is_clamped() {
    let (mut session, _log) = observed_session();
    let anchor = Point::new(123.0, 456.0);
    for _ in 0..200 {
        session.wheel(anchor, -1.0);
    }
    assert_eq!(session.viewport().scale(), 50.0);
    assert!(!session.wheel(anchor, -1.0));

    for _ in 0..200 {
        session.wheel(anchor, 1.0);
    }
    assert_eq!(session.viewport().scale(), 5.0);
    assert!(!session.wheel(anchor, 1.0));
}

#[test]
fn reset_clears_segments_and_view_but_keeps_window() {
    let (mut session, log) = observed_session();
    let window = ClipWindow::new(-1.0, -2.0, 3.0, 4.0).unwrap();
    session.set_window(window);
    session.add_default_segment();
    session.pointer_down(Point::new(0.0, 0.0));
    session.pointer_move(Point::new(10.0, 10.0));
    log.borrow_mut().clear();

    session.reset();
    assert!(session.scene().is_empty());
    assert_eq!(session.scene().window(), window);
    assert!(!session.is_dragging());
    assert_eq!(session.viewport().origin_on_screen(), Point::new(400.0, 300.0));
    assert_eq!(*log.borrow(), [StateChange::Scene, StateChange::View]);
}

#[test]
fn randomized_scene_is_fully_clipped() {
    let (mut session, log) = observed_session();
    let mut rng = StdRng::seed_from_u64(7);
    let config = RandomConfig {
        segment_count: 12,
        ..RandomConfig::default()
    };
    session.randomize_segments(&mut rng, &config);
    session.randomize_window(&mut rng, &config);

    assert_eq!(session.scene().len(), 12);
    let window = session.scene().window();
    for entry in session.scene().results() {
        if let ClipResult::Accepted(line) = entry.result {
            for p in [line.p0, line.p1] {
                assert!(p.x >= window.x_min() - 1e-9 && p.x <= window.x_max() + 1e-9);
                assert!(p.y >= window.y_min() - 1e-9 && p.y <= window.y_max() + 1e-9);
            }
        }
    }
    assert_eq!(log.borrow().first(), Some(&StateChange::Scene));
}

#[test]
fn draw_list_tracks_the_view() {
    let (mut session, _log) = observed_session();
    session.add_segment(Line::new((-2.0, 0.0), (2.0, 0.0)));
    session.pointer_down(Point::new(0.0, 0.0));
    session.pointer_move(Point::new(50.0, -20.0));

    let frame = session.draw_list();
    let clipped = frame
        .ops()
        .iter()
        .find_map(|op| match op {
            DrawOp::Clipped { line, .. } => Some(*line),
            _ => None,
        })
        .unwrap();
    // Origin moved to (450, 280); world x = ±2 is ±40 px at scale 20.
    assert_eq!(clipped, Line::new((410.0, 280.0), (490.0, 280.0)));

    let outline = frame
        .ops()
        .iter()
        .find_map(|op| match op {
            DrawOp::WindowOutline(rect) => Some(*rect),
            _ => None,
        })
        .unwrap();
    assert_eq!(outline.center(), Point::new(450.0, 280.0));
}
