use crate::device_camera::interface::{CameraError, StreamInfo};
use crate::image_classifier::interface::{ClassifierError, Prediction};

/// Startup runs strictly in sequence: privacy notice, camera permission,
/// model load. Failures before `Ready` are terminal; prediction failures are
/// not.
#[derive(Clone, Debug)]
pub enum State {
    Initializing,
    AwaitingPermission,
    LoadingModel {
        stream: StreamInfo,
    },
    Ready {
        stream: StreamInfo,
        ranked: Option<Vec<Prediction>>,
    },
    Predicting {
        stream: StreamInfo,
        ranked: Option<Vec<Prediction>>,
    },
    Halted {
        message: String,
    },
}

#[derive(Debug)]
pub enum Event {
    NoticeAcknowledged,
    CameraSetupDone(Result<StreamInfo, CameraError>),
    ModelLoadDone(Result<(), ClassifierError>),
    CaptureClicked,
    PredictDone(Result<Vec<Prediction>, Box<dyn std::error::Error + Send + Sync>>),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    SubscribeToDisplayEvents,
    ShowNotice,
    SetupCamera,
    LoadModel,
    CaptureAndPredict,
}

pub fn init() -> (State, Vec<Effect>) {
    (
        State::Initializing,
        vec![Effect::SubscribeToDisplayEvents, Effect::ShowNotice],
    )
}

pub fn transition(state: State, event: Event) -> (State, Vec<Effect>) {
    match (state, event) {
        (State::Initializing, Event::NoticeAcknowledged) => {
            (State::AwaitingPermission, vec![Effect::SetupCamera])
        }

        (State::AwaitingPermission, Event::CameraSetupDone(Ok(stream))) => {
            (State::LoadingModel { stream }, vec![Effect::LoadModel])
        }
        (State::AwaitingPermission, Event::CameraSetupDone(Err(e))) => (
            State::Halted {
                message: e.to_string(),
            },
            vec![],
        ),

        (State::LoadingModel { stream }, Event::ModelLoadDone(Ok(()))) => (
            State::Ready {
                stream,
                ranked: None,
            },
            vec![],
        ),
        (State::LoadingModel { .. }, Event::ModelLoadDone(Err(e))) => (
            State::Halted {
                message: e.to_string(),
            },
            vec![],
        ),

        (State::Ready { stream, ranked }, Event::CaptureClicked) => (
            State::Predicting { stream, ranked },
            vec![Effect::CaptureAndPredict],
        ),

        (State::Predicting { stream, .. }, Event::PredictDone(Ok(ranked))) => (
            State::Ready {
                stream,
                ranked: Some(ranked),
            },
            vec![],
        ),
        // Failed predictions keep the previous result on screen
        (State::Predicting { stream, ranked }, Event::PredictDone(Err(_))) => {
            (State::Ready { stream, ranked }, vec![])
        }

        // Clicks outside Ready are dropped, including while a prediction is
        // already in flight
        (state, _) => (state, vec![]),
    }
}
