use crate::device_camera::interface::CameraError;
use crate::device_display::interface::DeviceDisplayEvent;
use crate::image_classifier::labels;
use crate::skin_scan::core::{Effect, Event};
use crate::skin_scan::tests::fixture::Fixture;
use std::time::Duration;

fn recv_event(fixture: &Fixture) -> Event {
    fixture
        .skin_scan
        .event_receiver
        .lock()
        .unwrap()
        .recv_timeout(Duration::from_secs(5))
        .unwrap()
}

#[test]
fn test_show_notice_effect() {
    let f = Fixture::new();

    f.skin_scan.interpret_effect(Effect::ShowNotice);

    let display = f.display.lock().unwrap();
    assert_eq!(display.notices.len(), 1);
    assert_eq!(display.notices[0], f.config.privacy_notice);
}

#[test]
fn test_setup_camera_effect_sizes_preview() {
    let f = Fixture::new();

    f.skin_scan.interpret_effect(Effect::SetupCamera);

    match recv_event(&f) {
        Event::CameraSetupDone(Ok(stream)) => {
            assert_eq!((stream.width, stream.height), (640, 480));
        }
        event => panic!("Unexpected event: {:?}", event),
    }

    // 640x480 stream against a 480 base keeps the aspect ratio
    let preview = f.display.lock().unwrap().preview_size;
    assert_eq!(preview, Some((640, 480)));
}

#[test]
fn test_setup_camera_effect_denied() {
    let f = Fixture::new_with_denied_camera();

    f.skin_scan.interpret_effect(Effect::SetupCamera);

    match recv_event(&f) {
        Event::CameraSetupDone(Err(CameraError::PermissionDenied(_))) => (),
        event => panic!("Unexpected event: {:?}", event),
    }
    assert_eq!(f.display.lock().unwrap().preview_size, None);
}

#[test]
fn test_load_model_effect_runs_warmup() {
    let f = Fixture::new();

    f.skin_scan.interpret_effect(Effect::LoadModel);

    match recv_event(&f) {
        Event::ModelLoadDone(Ok(())) => (),
        event => panic!("Unexpected event: {:?}", event),
    }
}

#[test]
fn test_capture_and_predict_effect() {
    let f = Fixture::new();

    f.skin_scan.interpret_effect(Effect::CaptureAndPredict);

    match recv_event(&f) {
        Event::PredictDone(Ok(ranked)) => {
            assert_eq!(ranked.len(), f.config.top_k);
            for pair in ranked.windows(2) {
                assert!(pair[0].score >= pair[1].score);
            }
            for prediction in &ranked {
                assert!(labels::LABELS.contains(&prediction.label.as_str()));
            }
        }
        event => panic!("Unexpected event: {:?}", event),
    }
}

#[test]
fn test_display_events_are_forwarded() {
    let f = Fixture::new();
    let sender = f.display.lock().unwrap().event_sender();

    let skin_scan = f.skin_scan.clone();
    std::thread::spawn(move || skin_scan.interpret_effect(Effect::SubscribeToDisplayEvents));

    sender.send(DeviceDisplayEvent::NoticeAcknowledged).unwrap();
    sender.send(DeviceDisplayEvent::CaptureClicked).unwrap();

    match recv_event(&f) {
        Event::NoticeAcknowledged => (),
        event => panic!("Unexpected event: {:?}", event),
    }
    match recv_event(&f) {
        Event::CaptureClicked => (),
        event => panic!("Unexpected event: {:?}", event),
    }
}
