use algotty::algos::two_pointer::{ArrayState, TrapBruteForce, TrapTwoPointer};
use algotty::algos::TraceGenerator;
use algotty::input::{parse_heights, ValidationError};
use algotty::playback::autoplay::Speed;
use algotty::playback::{Playback, PlaybackState, Tick};
use algotty::session::{Session, SessionError};
use algotty::trace::{GenerationError, Trace, TraceBuilder};
use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

const TRAP_INPUT: &str = "0,1,0,2,1,0,1,3,2,1,2,1";

fn trap_session() -> Session<Vec<i64>, ArrayState> {
    let variants: Vec<Box<dyn TraceGenerator<Params = Vec<i64>, State = ArrayState>>> =
        vec![Box::new(TrapTwoPointer), Box::new(TrapBruteForce)];
    Session::new(parse_heights, variants, Speed::Medium)
}

/// Tiny generator for state-machine tests: `params` is the number of
/// intermediate steps, each snapshot's state is its own index.
struct Counting;

impl TraceGenerator for Counting {
    type Params = usize;
    type State = usize;

    fn name(&self) -> &'static str {
        "counting"
    }

    fn listing(&self) -> &'static [&'static str] {
        &["count up"]
    }

    fn generate(&self, steps: &usize) -> Result<Trace<usize>, GenerationError> {
        let mut builder = TraceBuilder::new("counting");
        for i in 0..*steps {
            builder.record(i, format!("step {}", i), Some(0));
        }
        builder.record_terminal(*steps, "done", Some(0));
        builder.finish()
    }
}

#[test]
fn cursor_stays_in_bounds() {
    let heights = parse_heights(TRAP_INPUT).expect("valid heights");
    let trace = TrapTwoPointer.generate(&heights).expect("trace");
    let n = trace.len();

    let mut playback = Playback::new();
    assert_eq!(playback.cursor(), -1);
    playback.load(trace);
    assert_eq!(playback.cursor(), 0);
    assert_eq!(playback.state(), PlaybackState::Paused);

    // Backward at 0 is a no-op, not an error
    assert!(!playback.step_backward());
    assert_eq!(playback.cursor(), 0);

    for _ in 0..n + 10 {
        playback.step_forward();
        assert!(playback.cursor() >= 0 && playback.cursor() < n as isize);
    }
    // Forward at the end is a no-op
    assert_eq!(playback.cursor(), (n - 1) as isize);
    assert!(!playback.step_forward());
    assert_eq!(playback.cursor(), (n - 1) as isize);

    for _ in 0..n + 10 {
        playback.step_backward();
        assert!(playback.cursor() >= 0);
    }
    assert_eq!(playback.cursor(), 0);
}

#[test]
fn autoplay_fires_exactly_n_minus_one_ticks_then_stops() {
    let variants: Vec<Box<dyn TraceGenerator<Params = usize, State = usize>>> =
        vec![Box::new(Counting)];
    let mut session = Session::new(|_raw: &str| Ok(7usize), variants, Speed::Fast);
    session.load("ignored").expect("load");
    let n = session.trace_len();
    assert_eq!(n, 8);

    let start = Instant::now();
    assert!(session.play(start));
    assert_eq!(session.state(), PlaybackState::Playing);

    let interval = Speed::Fast.interval();
    let mut ticks = 0;
    let mut now = start;
    // Give the timer far more opportunities than it needs
    for _ in 0..n * 4 {
        now += interval;
        match session.on_tick(now) {
            Tick::Advanced => ticks += 1,
            Tick::Finished => {
                ticks += 1;
                break;
            }
            Tick::Ignored => panic!("timer went silent while playing"),
        }
    }
    assert_eq!(ticks, n - 1);
    assert_eq!(session.state(), PlaybackState::Paused);
    assert_eq!(session.cursor(), (n - 1) as isize);

    // No further tick fires, even long after
    assert_eq!(session.on_tick(now + interval * 100), Tick::Ignored);
    assert_eq!(session.cursor(), (n - 1) as isize);
}

#[test]
fn play_from_the_end_rewinds_to_start() {
    let mut session = trap_session();
    session.load(TRAP_INPUT).expect("load");
    session.jump_to_end();
    assert_eq!(session.cursor(), (session.trace_len() - 1) as isize);

    session.play(Instant::now());
    assert_eq!(session.state(), PlaybackState::Playing);
    assert_eq!(session.cursor(), 0);
}

#[test]
fn manual_step_cancels_autoplay() {
    let mut session = trap_session();
    session.load(TRAP_INPUT).expect("load");

    let start = Instant::now();
    session.play(start);
    assert!(session.step_forward());
    assert_eq!(session.state(), PlaybackState::Paused);

    // The pending tick was cancelled with the pause
    assert_eq!(
        session.on_tick(start + Duration::from_secs(60)),
        Tick::Ignored
    );
}

#[test]
fn reset_is_idempotent() {
    let mut session = trap_session();
    session.load(TRAP_INPUT).expect("load");
    session.step_forward();
    session.play(Instant::now());

    session.reset();
    assert_eq!(session.state(), PlaybackState::Idle);
    assert_eq!(session.cursor(), -1);
    assert_eq!(session.trace_len(), 0);
    assert!(session.snapshot().is_none());

    // A second reset changes nothing
    session.reset();
    assert_eq!(session.state(), PlaybackState::Idle);
    assert_eq!(session.cursor(), -1);
    assert_eq!(session.trace_len(), 0);
}

#[test]
fn variant_switch_regenerates_and_resets_cursor() {
    let mut session = trap_session();
    session.load(TRAP_INPUT).expect("load");
    let two_pointer_len = session.trace_len();

    session.step_forward();
    session.step_forward();
    session.step_forward();
    assert_eq!(session.cursor(), 3);

    session.switch_variant(1).expect("switch");
    assert_eq!(session.active_variant(), 1);
    assert_eq!(session.variant_name(), "brute force");
    assert_eq!(session.cursor(), 0);
    assert_eq!(session.state(), PlaybackState::Paused);
    // Different instrumentation granularity, different trace length
    assert_ne!(session.trace_len(), two_pointer_len);
}

#[test]
fn failed_switch_leaves_everything_untouched() {
    // Validator accepts the first call and rejects every later one, so the
    // switch's re-validation fails while the loaded trace stays intact.
    let calls = Rc::new(Cell::new(0u32));
    let validator_calls = Rc::clone(&calls);
    let validator = move |raw: &str| {
        validator_calls.set(validator_calls.get() + 1);
        if validator_calls.get() == 1 {
            parse_heights(raw)
        } else {
            Err(ValidationError::Empty)
        }
    };

    let variants: Vec<Box<dyn TraceGenerator<Params = Vec<i64>, State = ArrayState>>> =
        vec![Box::new(TrapTwoPointer), Box::new(TrapBruteForce)];
    let mut session = Session::new(validator, variants, Speed::Medium);

    session.load(TRAP_INPUT).expect("load");
    let len_before = session.trace_len();
    session.step_forward();
    session.step_forward();
    let cursor_before = session.cursor();
    let snapshot_before = session.snapshot().expect("snapshot").clone();

    let err = session.switch_variant(1).expect_err("must fail validation");
    assert_eq!(err, SessionError::Validation(ValidationError::Empty));
    assert_eq!(calls.get(), 2, "exactly one re-validation attempt");

    assert_eq!(session.active_variant(), 0);
    assert_eq!(session.trace_len(), len_before);
    assert_eq!(session.cursor(), cursor_before);
    assert_eq!(session.snapshot().expect("snapshot"), &snapshot_before);
    assert_eq!(session.state(), PlaybackState::Paused);
}

#[test]
fn switch_while_idle_only_records_the_default() {
    let mut session = trap_session();
    assert_eq!(session.state(), PlaybackState::Idle);

    session.switch_variant(1).expect("idle switch");
    assert_eq!(session.active_variant(), 1);
    assert_eq!(session.state(), PlaybackState::Idle);
    assert_eq!(session.cursor(), -1);

    // The recorded default is used by the next load
    session.load(TRAP_INPUT).expect("load");
    assert_eq!(session.variant_name(), "brute force");
}

#[test]
fn switch_to_unknown_variant_is_rejected() {
    let mut session = trap_session();
    session.load(TRAP_INPUT).expect("load");
    let err = session.switch_variant(9).expect_err("out of range");
    assert_eq!(err, SessionError::UnknownVariant { index: 9, count: 2 });
    assert_eq!(session.active_variant(), 0);
    assert_eq!(session.cursor(), 0);
}

#[test]
fn rejected_load_leaves_session_idle() {
    let mut session = trap_session();
    let err = session.load("1,x,3").expect_err("invalid input");
    assert!(matches!(err, SessionError::Validation(_)));
    assert_eq!(session.state(), PlaybackState::Idle);
    assert_eq!(session.cursor(), -1);
    assert!(session.last_input().is_none());
}

#[test]
fn single_snapshot_trace_pauses_on_first_tick() {
    let variants: Vec<Box<dyn TraceGenerator<Params = usize, State = usize>>> =
        vec![Box::new(Counting)];
    let mut session = Session::new(|_raw: &str| Ok(0usize), variants, Speed::VeryFast);
    session.load("ignored").expect("load");
    assert_eq!(session.trace_len(), 1);

    let start = Instant::now();
    session.play(start);
    let tick = session.on_tick(start + Speed::VeryFast.interval());
    assert_eq!(tick, Tick::Finished);
    assert_eq!(session.state(), PlaybackState::Paused);
    assert_eq!(session.cursor(), 0);
}
