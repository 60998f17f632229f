use crate::config::Config;
use crate::device_camera::interface::StillImage;
use crate::prediction_client::interface::Prediction;
use crate::sign_reader::core::{
    init, transition, Cycle, CycleId, CyclePhase, Display, Effect, Model, Msg, ServiceStatus,
    CAPTURE_FAILED_MESSAGE, REQUEST_FAILED_MESSAGE,
};

fn jpeg() -> StillImage {
    StillImage::new(vec![0xff, 0xd8, 0xff], "image/jpeg")
}

fn prediction(sign: &str, message: Option<&str>) -> Prediction {
    Prediction {
        sign: sign.to_string(),
        message: message.map(str::to_string),
    }
}

/// Trigger, capture and predict one cycle, returning the resulting model.
fn run_cycle(
    config: &Config,
    model: Model,
    result: Result<Prediction, Box<dyn std::error::Error + Send + Sync>>,
) -> Model {
    let (model, effects) = transition(config, model, Msg::Trigger);
    let cycle = match effects.as_slice() {
        [Effect::CaptureFrame { cycle }] => *cycle,
        other => panic!("Unexpected effects {:?}", other),
    };
    let (model, _) = transition(
        config,
        model,
        Msg::FrameCaptureDone {
            cycle,
            result: Ok(jpeg()),
        },
    );
    let (model, effects) = transition(config, model, Msg::PredictDone { cycle, result });
    assert!(effects.is_empty());
    model
}

#[test]
fn test_init() {
    let (model, effects) = init();

    assert_eq!(model, Model::default());
    assert_eq!(effects, vec![Effect::SubscribeTrigger, Effect::CheckService]);
}

#[test]
fn test_trigger_starts_capture_and_clears_error() {
    let config = Config::default();
    let model = Model {
        display: Display {
            result: "घर".to_string(),
            message: "old".to_string(),
            error: REQUEST_FAILED_MESSAGE.to_string(),
        },
        ..Model::default()
    };

    let (model, effects) = transition(&config, model, Msg::Trigger);

    assert_eq!(effects, vec![Effect::CaptureFrame { cycle: CycleId(0) }]);
    assert_eq!(
        model.cycles,
        vec![Cycle {
            id: CycleId(0),
            phase: CyclePhase::Capturing,
        }]
    );
    assert_eq!(model.next_cycle, CycleId(1));
    assert_eq!(model.display.error, "");
    assert_eq!(model.display.result, "घर");
}

#[test]
fn test_capture_failure_skips_request() {
    let config = Config::default();
    let (model, _) = transition(&config, Model::default(), Msg::Trigger);

    let (model, effects) = transition(
        &config,
        model,
        Msg::FrameCaptureDone {
            cycle: CycleId(0),
            result: Err("camera not ready".into()),
        },
    );

    assert!(effects.is_empty());
    assert!(model.is_idle());
    assert_eq!(model.display, Display {
        result: String::new(),
        message: String::new(),
        error: CAPTURE_FAILED_MESSAGE.to_string(),
    });
}

#[test]
fn test_empty_frame_is_a_capture_failure() {
    let config = Config::default();
    let (model, _) = transition(&config, Model::default(), Msg::Trigger);

    let (model, effects) = transition(
        &config,
        model,
        Msg::FrameCaptureDone {
            cycle: CycleId(0),
            result: Ok(StillImage::new(vec![], "image/jpeg")),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(model.display.error, CAPTURE_FAILED_MESSAGE);
}

#[test]
fn test_captured_frame_is_sent_for_prediction() {
    let config = Config::default();
    let (model, _) = transition(&config, Model::default(), Msg::Trigger);

    let (model, effects) = transition(
        &config,
        model,
        Msg::FrameCaptureDone {
            cycle: CycleId(0),
            result: Ok(jpeg()),
        },
    );

    assert_eq!(
        effects,
        vec![Effect::Predict {
            cycle: CycleId(0),
            image: jpeg(),
        }]
    );
    assert_eq!(model.cycles[0].phase, CyclePhase::Requesting);
}

#[test]
fn test_known_sign_is_translated() {
    let config = Config::default();

    let model = run_cycle(&config, Model::default(), Ok(prediction("Ghar", None)));

    assert!(model.is_idle());
    assert_eq!(model.display, Display {
        result: "घर".to_string(),
        message: String::new(),
        error: String::new(),
    });
}

#[test]
fn test_unknown_sign_passes_through_with_message() {
    let config = Config::default();

    let model = run_cycle(
        &config,
        Model::default(),
        Ok(prediction("Unknown", Some("low confidence"))),
    );

    assert_eq!(model.display.result, "Unknown");
    assert_eq!(model.display.message, "low confidence");
    assert_eq!(model.display.error, "");
}

#[test]
fn test_unrecognized_sign_leaves_result_empty() {
    let config = Config::default();

    let model = run_cycle(
        &config,
        Model::default(),
        Ok(prediction("", Some("Sign not recognized"))),
    );

    assert_eq!(model.display.result, "");
    assert_eq!(model.display.message, "Sign not recognized");
}

#[test]
fn test_request_failure_replaces_previous_result() {
    let config = Config::default();
    let model = run_cycle(
        &config,
        Model::default(),
        Ok(prediction("Namaskaar", Some("Prediction successful!"))),
    );
    assert_eq!(model.display.result, "नमस्कार");

    let model = run_cycle(&config, model, Err("connection refused".into()));

    assert_eq!(model.display, Display {
        result: String::new(),
        message: String::new(),
        error: REQUEST_FAILED_MESSAGE.to_string(),
    });
}

#[test]
fn test_second_success_replaces_first() {
    let config = Config::default();
    let model = run_cycle(
        &config,
        Model::default(),
        Ok(prediction("Ma", Some("Prediction successful!"))),
    );

    let model = run_cycle(&config, model, Ok(prediction("Dhanyabaad", None)));

    assert_eq!(model.display, Display {
        result: "धन्यवाद".to_string(),
        message: String::new(),
        error: String::new(),
    });
    assert_eq!(model.next_cycle, CycleId(2));
}

#[test]
fn test_success_after_failure_clears_error() {
    let config = Config::default();
    let model = run_cycle(&config, Model::default(), Err("timeout".into()));
    assert_eq!(model.display.error, REQUEST_FAILED_MESSAGE);

    let model = run_cycle(&config, model, Ok(prediction("Ghar", None)));

    assert_eq!(model.display.error, "");
    assert_eq!(model.display.result, "घर");
}

#[test]
fn test_overlapping_cycles_last_arrival_wins() {
    let config = Config::default();
    let (model, _) = transition(&config, Model::default(), Msg::Trigger);
    let (model, _) = transition(&config, model, Msg::Trigger);
    assert_eq!(model.cycles.len(), 2);

    let mut model = model;
    for cycle in [CycleId(0), CycleId(1)] {
        model = transition(
            &config,
            model,
            Msg::FrameCaptureDone {
                cycle,
                result: Ok(jpeg()),
            },
        )
        .0;
    }

    let (model, _) = transition(
        &config,
        model,
        Msg::PredictDone {
            cycle: CycleId(1),
            result: Ok(prediction("Ma", None)),
        },
    );
    let (model, _) = transition(
        &config,
        model,
        Msg::PredictDone {
            cycle: CycleId(0),
            result: Ok(prediction("Ghar", None)),
        },
    );

    assert!(model.is_idle());
    assert_eq!(model.display.result, "घर");
}

#[test]
fn test_completion_for_unknown_cycle_is_ignored() {
    let config = Config::default();
    let model = Model::default();

    let (model, effects) = transition(
        &config,
        model,
        Msg::PredictDone {
            cycle: CycleId(7),
            result: Ok(prediction("Ghar", None)),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(model, Model::default());
}

#[test]
fn test_quit_waits_for_in_flight_cycle() {
    let config = Config::default();
    let (model, _) = transition(&config, Model::default(), Msg::Trigger);

    let (model, _) = transition(&config, model, Msg::Quit);
    assert!(model.quitting);
    assert!(!model.is_finished());

    let (model, effects) = transition(&config, model, Msg::Trigger);
    assert!(effects.is_empty());
    assert_eq!(model.cycles.len(), 1);

    let (model, _) = transition(
        &config,
        model,
        Msg::FrameCaptureDone {
            cycle: CycleId(0),
            result: Err("camera not ready".into()),
        },
    );
    assert!(model.is_finished());
}

#[test]
fn test_service_check_updates_status() {
    let config = Config::default();

    let (model, _) = transition(
        &config,
        Model::default(),
        Msg::ServiceCheckDone(Ok("Sign Language Recognition Backend".to_string())),
    );
    assert_eq!(
        model.service,
        ServiceStatus::Reachable("Sign Language Recognition Backend".to_string())
    );

    let (model, _) = transition(
        &config,
        model,
        Msg::ServiceCheckDone(Err("connection refused".into())),
    );
    assert_eq!(model.service, ServiceStatus::Unreachable);
}
