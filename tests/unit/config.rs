use super::*;

#[test]
fn defaults_are_valid() {
    let cfg = RenderConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.text_template, TextTemplate::Simple);
    assert_eq!(cfg.background(), Rgba8::BLACK);
}

#[test]
fn partial_json_fills_in_defaults() {
    let cfg: RenderConfig =
        serde_json::from_str(r#"{ "canvas": { "width": 320, "height": 180 }, "text_template": "plain" }"#)
            .unwrap();
    assert_eq!(cfg.canvas.width, 320);
    assert_eq!(cfg.fps, Fps { num: 30, den: 1 });
    assert_eq!(cfg.text_template, TextTemplate::Plain);
}

#[test]
fn validate_rejects_bad_canvas_and_fps() {
    let mut cfg = RenderConfig::default();
    cfg.canvas.width = 0;
    assert!(cfg.validate().is_err());

    let mut cfg = RenderConfig::default();
    cfg.canvas.height = 70_000;
    assert!(cfg.validate().is_err());

    let mut cfg = RenderConfig::default();
    cfg.fps = Fps { num: 30, den: 0 };
    assert!(cfg.validate().is_err());
}

#[test]
fn from_json_path_reports_missing_files_and_bad_json() {
    let dir = std::path::PathBuf::from("target").join("config_unit");
    std::fs::create_dir_all(&dir).unwrap();

    assert!(RenderConfig::from_json_path(&dir.join("missing.json")).is_err());

    let bad = dir.join("bad.json");
    std::fs::write(&bad, "{ not json").unwrap();
    let err = RenderConfig::from_json_path(&bad).unwrap_err();
    assert!(err.to_string().contains("serialization error:"));

    let good = dir.join("good.json");
    std::fs::write(&good, r#"{ "fps": { "num": 24, "den": 1 } }"#).unwrap();
    let cfg = RenderConfig::from_json_path(&good).unwrap();
    assert_eq!(cfg.fps.num, 24);
}

#[test]
fn templates_pick_distinct_math_styles() {
    assert_eq!(TextTemplate::Simple.math_font_style(), "italic");
    assert_eq!(TextTemplate::Plain.math_font_family(), PLAIN_FONT_FAMILY);
}
