//! Contract Invariant Tests
//!
//! These tests verify the non-negotiable guarantees end to end.

use barcode_core::{
    generate, normalize, BarcodeRequest, BarcodeService, CodeError, MediaAsset, PresetRegistry,
    RenderOptions, RenderOverrides, RenderPreset, Symbology,
};

fn create_request(code: &str, symbology: &str) -> BarcodeRequest {
    BarcodeRequest {
        code: code.to_string(),
        symbology: symbology.to_string(),
        preset: None,
        options: None,
    }
}

fn count_bar_rects(svg: &str) -> usize {
    svg.matches("<rect ").count()
}

#[test]
fn invariant_upc_a_end_to_end() {
    let service = BarcodeService::default();
    let response = service.respond(&create_request("03600029145", "upc-a"));

    assert!(response.success);
    assert_eq!(response.code, "036000291452");
    assert_eq!(response.symbology, "upc-a");
    assert!(response.error.is_none());

    // one rect per ink module of the 95-module pattern
    let pattern = barcode_core::encode(&normalize("036000291452", Symbology::UpcA).unwrap());
    assert_eq!(pattern.len(), 95);
    assert_eq!(count_bar_rects(&response.svg), pattern.ink_modules());
    assert!(response.svg.contains(r#"viewBox="0 0 200 80""#));
}

#[test]
fn invariant_response_json_shape() {
    let service = BarcodeService::default();
    let response = service.respond_json(r#"{"code": "400638133393", "type": "ean-13"}"#);
    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["success"], true);
    assert_eq!(json["code"], "4006381333931");
    assert_eq!(json["type"], "ean-13");
    assert!(json["svg"].as_str().unwrap().starts_with("<svg"));
    assert!(!json["svg_base64"].as_str().unwrap().is_empty());
    assert!(json.get("error").is_none());
}

#[test]
fn invariant_svg_base64_decodes_to_svg() {
    use base64::Engine;

    let response = BarcodeService::default().respond(&create_request("SKU-42", "code-128"));
    let decoded = base64::engine::general_purpose::STANDARD
        .decode(&response.svg_base64)
        .unwrap();
    assert_eq!(decoded, response.svg.as_bytes());
}

#[test]
fn invariant_options_follow_request() {
    let service = BarcodeService::default();
    let response = service.respond_json(
        r##"{"code": "03600029145", "type": "upc-a",
            "options": {"width": 300, "height": 120, "display_value": false, "line_color": "#112233"}}"##,
    );

    assert!(response.success);
    assert!(response.svg.contains(r#"width="300" height="120" viewBox="0 0 300 120""#));
    assert!(response.svg.contains(r##"fill="#112233""##));
    assert!(!response.svg.contains("<text"));
}

#[test]
fn invariant_rejections_are_terminal() {
    let service = BarcodeService::default();

    let cases = [
        ("12345", "upc-a", "invalid_length"),
        ("abc", "ean-13", "unsupported_character"),
        ("héllo", "code-128", "unsupported_character"),
        ("036000291453", "upc-a", "checksum_mismatch"),
        ("03600029145", "qr", "unsupported_symbology"),
    ];

    for (code, symbology, kind) in cases {
        let response = service.respond(&create_request(code, symbology));
        assert!(!response.success, "{code} as {symbology}");
        assert_eq!(response.error_kind.as_deref(), Some(kind), "{code} as {symbology}");
        assert!(response.svg.is_empty());
        assert!(response.svg_base64.is_empty());
        assert!(response.code.is_empty());
    }
}

#[test]
fn invariant_accented_character_position() {
    assert_eq!(
        normalize("héllo", Symbology::Code128).unwrap_err(),
        CodeError::UnsupportedCharacter { character: 'é', position: 1 }
    );
}

#[test]
fn invariant_margin_too_large_emits_no_svg() {
    let mut request = create_request("03600029145", "upc-a");
    request.options = Some(RenderOverrides { margin: Some(100.0), ..Default::default() });

    let response = BarcodeService::default().respond(&request);
    assert!(!response.success);
    assert_eq!(response.error_kind.as_deref(), Some("invalid_render_options"));
    assert!(response.svg.is_empty());
}

#[test]
fn invariant_generate_is_deterministic() {
    let options = RenderOptions::default();
    let a = generate("SKU 42/b", Symbology::Code128, &options).unwrap();
    let b = generate("SKU 42/b", Symbology::Code128, &options).unwrap();
    assert_eq!(a.image.svg, b.image.svg);
    assert_eq!(a.pattern, b.pattern);
}

#[test]
fn invariant_custom_preset_from_registry() {
    let mut registry = PresetRegistry::new();
    registry.register(RenderPreset {
        id: "tiny".to_string(),
        name: "Tiny".to_string(),
        description: String::new(),
        options: RenderOptions {
            width: 100.0,
            height: 30.0,
            margin: 2.0,
            display_value: false,
            ..RenderOptions::default()
        },
    });
    let service = BarcodeService::new(registry);

    let mut request = create_request("4006381333931", "ean13");
    request.preset = Some("tiny".to_string());
    let generated = service.generate(&request).unwrap();
    assert_eq!(generated.options.width, 100.0);
    assert!(generated.image.svg.contains(r#"viewBox="0 0 100 30""#));
}

#[test]
fn invariant_media_asset_matches_response() {
    let service = BarcodeService::default();
    let generated = service.generate(&create_request("036000291452", "UPC-A")).unwrap();
    let asset = MediaAsset::from_barcode(&generated).unwrap();

    assert_eq!(asset.code, "036000291452");
    assert_eq!(asset.symbology, "upc-a");
    assert_eq!(asset.data_base64, generated.image.base64());
    assert_eq!((asset.width, asset.height), (200.0, 80.0));
}

#[test]
fn invariant_fractional_options_render() {
    let response = BarcodeService::default().respond_json(
        r#"{"code": "4006381333931", "type": "ean-13", "options": {"width": 250.5, "margin": 7.25}}"#,
    );

    assert!(response.success, "{:?}", response.error);
    assert!(response.svg.contains(r#"width="250.5" height="80" viewBox="0 0 250.5 80""#));
    assert!(response.svg.contains(r#"<rect x="7.25" "#));
}

#[test]
fn invariant_negative_option_is_a_render_error() {
    let service = BarcodeService::default();
    for options in [r#"{"margin": -5}"#, r#"{"width": -200}"#, r#"{"font_size": -1.5}"#] {
        let payload = format!(r#"{{"code": "03600029145", "type": "upc-a", "options": {options}}}"#);
        let response = service.respond_json(&payload);
        assert!(!response.success, "{options}");
        assert_eq!(response.error_kind.as_deref(), Some("invalid_render_options"), "{options}");
        assert!(response.svg.is_empty());
    }
}
