use serde_json::json;
use shared::capabilities::ScannerSettings;
use shared::{
    App, Classification, CruxApp, Language, Model, PermissionState, ScanPayload, Screen,
    TextDirection, View,
};

fn granted() -> Model {
    Model {
        camera_permission: PermissionState::Granted,
        ..Model::default()
    }
}

#[test]
fn home_view_wire_shape() {
    let mut model = granted();
    model.start_scan();
    model.accept_scan(&ScanPayload::text("4001234567890"));

    let view = App.view(&model);
    let value = serde_json::to_value(&view).expect("view model serializes");

    assert_eq!(
        value,
        json!({
            "screen": {
                "type": "home",
                "welcome": "Welcome to Barcode Scanner",
                "scan_button": "SCAN PRODUCT",
                "made_by": "Made by Muhammad Attiq",
                "result": {
                    "title": "🇩🇪 German Product",
                    "message": "This product is from Germany.\n\nSAFE TO USE",
                    "classification": "safe",
                    "color": "green"
                }
            },
            "language": "english",
            "direction": "ltr",
            "switch_language": "اردو"
        })
    );
}

#[test]
fn scanning_view_wire_shape() {
    let mut model = granted();
    model.start_scan();

    let value = serde_json::to_value(App.view(&model)).expect("view model serializes");
    assert_eq!(value["screen"]["type"], "scanning");
    assert_eq!(value["screen"]["accepting_scans"], true);
    assert_eq!(value["screen"]["scan_again"], serde_json::Value::Null);
    assert_eq!(
        value["screen"]["settings"]["symbologies"],
        json!(["ean13", "ean8", "upc_a", "upc_e", "qr"])
    );
    assert_eq!(value["screen"]["settings"]["facing"], "Back");
}

#[test]
fn urdu_home_is_right_to_left() {
    let model = Model {
        language: Language::Urdu,
        ..granted()
    };

    let view = App.view(&model);
    assert_eq!(view.direction, TextDirection::Rtl);
    assert_eq!(view.switch_language, "English");
    assert_eq!(
        view.screen,
        Screen::Home {
            welcome: "بارکوڈ سکینر میں خوش آمدید".into(),
            scan_button: "مصنوعات سکین کریں".into(),
            made_by: "محمد عتیق کی طرف سے بنایا گیا".into(),
            result: None,
        }
    );
}

#[test]
fn permanent_denial_points_to_settings() {
    let model = Model {
        camera_permission: PermissionState::Denied { permanently: true },
        ..Model::default()
    };

    let Screen::PermissionRequired {
        message,
        open_settings,
        ..
    } = App.view(&model).screen
    else {
        panic!("expected permission screen");
    };
    assert_eq!(message, "We need your permission to show the camera");
    assert!(open_settings);
}

#[test]
fn result_card_keeps_classification_colour() {
    for (raw, classification, color) in [
        ("7291234567890", Classification::Boycott, "red"),
        ("9551234567890", Classification::Safe, "green"),
        ("0001234567890", Classification::Unknown, "orange"),
        ("1", Classification::Invalid, "red"),
    ] {
        let mut model = granted();
        model.start_scan();
        model.accept_scan(&ScanPayload::text(raw));
        assert_eq!(model.view, View::Home);

        let Screen::Home {
            result: Some(card), ..
        } = App.view(&model).screen
        else {
            panic!("expected a result card for {raw}");
        };
        assert_eq!(card.classification, classification, "{raw}");
        assert_eq!(card.color, color, "{raw}");
    }
}

#[test]
fn scanner_settings_are_forwarded() {
    let mut model = granted();
    model.scanner = ScannerSettings::default().with_symbologies([shared::capabilities::Symbology::Qr]);
    model.start_scan();

    let Screen::Scanning { settings, .. } = App.view(&model).screen else {
        panic!("expected scanner screen");
    };
    assert_eq!(settings, model.scanner);
}
