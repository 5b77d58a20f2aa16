use approx::assert_relative_eq;
use cue_timing_core::{
    AnimationGroup, AnimationTime, Entry, ParamId, RelativeInterval, ScalarAnimation, TimingError,
    Value,
};

fn opacity_ramp(start: f64, stop: f64) -> ScalarAnimation {
    ScalarAnimation::from_values(
        "cube".to_string(),
        ParamId::new("opacity"),
        Value::Float(0.0),
        Value::Float(1.0),
        start,
        stop,
    )
    .unwrap()
}

#[test]
fn test_two_rescales_equal_composed_affine_map() {
    let mut animation = opacity_ramp(0.0, 1.0);
    animation.rescale_by(&RelativeInterval::new(0.2, 0.8).unwrap());
    animation.rescale_by(&RelativeInterval::new(0.0, 0.5).unwrap());

    assert_relative_eq!(animation.relative_start(), 0.1, epsilon = 1e-12);
    assert_relative_eq!(animation.relative_stop(), 0.4, epsilon = 1e-12);
}

#[test]
fn test_nested_windowed_groups_compose_like_direct_rescale() {
    // the same two-level nesting expressed through group windows
    let inner = AnimationGroup::new(vec![
        Entry::from(opacity_ramp(0.0, 1.0)).windowed(RelativeInterval::new(0.2, 0.8).unwrap())
    ]);
    let outer = AnimationGroup::new(vec![
        Entry::from(inner).windowed(RelativeInterval::new(0.0, 0.5).unwrap())
    ]);

    assert_eq!(outer.len(), 1);
    let leaf = &outer.animations()[0];
    assert_relative_eq!(leaf.relative_start(), 0.1, epsilon = 1e-12);
    assert_relative_eq!(leaf.effective_stop(), 0.4, epsilon = 1e-12);
}

#[test]
fn test_scalar_absolute_scaling() {
    let mut animation = opacity_ramp(0.25, 0.75);
    let run_time = AnimationTime::from_seconds(4.0).unwrap();
    animation
        .scale_to_absolute(run_time, AnimationTime::zero())
        .unwrap();

    let schedule = animation.schedule().unwrap();
    assert_relative_eq!(schedule.start.as_seconds(), 1.0, epsilon = 1e-9);
    assert_relative_eq!(schedule.stop.as_seconds(), 3.0, epsilon = 1e-9);
}

#[test]
fn test_absolute_scaling_honors_timeline_origin() {
    let mut animation = opacity_ramp(0.25, 0.75);
    let run_time = AnimationTime::from_seconds(4.0).unwrap();
    let origin = AnimationTime::from_seconds(10.0).unwrap();
    animation.scale_to_absolute(run_time, origin).unwrap();

    let schedule = animation.schedule().unwrap();
    assert_relative_eq!(schedule.start.as_seconds(), 11.0, epsilon = 1e-9);
    assert_relative_eq!(schedule.stop.as_seconds(), 13.0, epsilon = 1e-9);
}

#[test]
fn test_rescaling_twice_overwrites_schedule() {
    // the last scale_to_absolute before execution wins
    let mut animation = opacity_ramp(0.0, 1.0);
    animation
        .scale_to_absolute(AnimationTime::from_seconds(2.0).unwrap(), AnimationTime::zero())
        .unwrap();
    animation
        .scale_to_absolute(AnimationTime::from_seconds(6.0).unwrap(), AnimationTime::zero())
        .unwrap();

    let schedule = animation.schedule().unwrap();
    assert_relative_eq!(schedule.stop.as_seconds(), 6.0, epsilon = 1e-9);
}

#[test]
fn test_reversed_interval_is_rejected() {
    let err = RelativeInterval::new(0.8, 0.2).unwrap_err();
    assert!(matches!(err, TimingError::InvalidInterval { .. }));

    let err = RelativeInterval::try_from((0.5, 0.1)).unwrap_err();
    assert!(matches!(err, TimingError::InvalidInterval { .. }));
}

#[test]
fn test_group_rescale_reaches_every_leaf() {
    let mut group = AnimationGroup::new(vec![
        Entry::from(opacity_ramp(0.0, 0.5)),
        Entry::from(AnimationGroup::new(vec![Entry::from(opacity_ramp(0.5, 1.0))])),
    ]);
    group.rescale_by(&RelativeInterval::new(0.0, 0.5).unwrap());

    let starts: Vec<f64> = group.iter().map(|a| a.relative_start()).collect();
    let stops: Vec<f64> = group.iter().map(|a| a.effective_stop()).collect();
    assert_relative_eq!(starts[0], 0.0, epsilon = 1e-12);
    assert_relative_eq!(stops[0], 0.25, epsilon = 1e-12);
    assert_relative_eq!(starts[1], 0.25, epsilon = 1e-12);
    assert_relative_eq!(stops[1], 0.5, epsilon = 1e-12);
}
