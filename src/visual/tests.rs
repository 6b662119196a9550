// Tests for logo, favicon, font and color extraction.

use super::*;
use crate::fetch::FetchedStylesheet;
use crate::parse::Document;
use proptest::prelude::*;

fn doc(html: &str) -> Document {
    Document::parse(html, "https://example.com/shop/")
}

fn sheet(css: &str) -> FetchedStylesheet {
    FetchedStylesheet {
        url: "https://example.com/a.css".to_string(),
        css: css.to_string(),
    }
}

// Logo

#[test]
fn test_header_logo_outscores_product_image() {
    let html = r#"<header><img alt="Site Logo" src="/a.png"></header>
        <div class="product-card"><img alt="product photo" src="/b.png"></div>"#;
    let scores = score_images(&doc(html));
    assert_eq!(scores.len(), 2);
    assert!(scores[0].score > scores[1].score);
    assert!(scores[1].score < 0);

    let logo = detect_logo(&doc(html)).expect("logo detected");
    assert_eq!(logo.candidate_value, "https://example.com/a.png");
    assert_eq!(logo.source, "img");
}

#[test]
fn test_container_image_wins_outright() {
    let html = r#"<header><img alt="Company logo" class="logo-img" src="/big-logo.png"></header>
        <div id="logo"><img src="/brand.svg"></div>"#;
    let logo = detect_logo(&doc(html)).expect("logo detected");
    assert_eq!(logo.candidate_value, "https://example.com/brand.svg");
    assert_eq!(logo.score, 100);
    assert_eq!(logo.source, "container #logo img");
}

#[test]
fn test_container_background_image() {
    let html = r#"<a class="navbar-brand" href="/">
        <span style="background-image: url('/img/mark.png'); width: 40px"></span></a>"#;
    let logo = detect_logo(&doc(html)).expect("logo detected");
    assert_eq!(logo.candidate_value, "https://example.com/img/mark.png");
    assert_eq!(logo.score, 95);
}

#[test]
fn test_img_with_logo_class_is_its_own_container() {
    let logo = detect_logo(&doc(r#"<img class="logo" src="//cdn.example.com/l.png">"#))
        .expect("logo detected");
    assert_eq!(logo.candidate_value, "https://cdn.example.com/l.png");
    assert_eq!(logo.score, 100);
}

#[test]
fn test_no_logo_below_threshold() {
    let html = r#"<main><img src="/photo.jpg" alt="A river"><img src="/icon.png"></main>"#;
    assert!(detect_logo(&doc(html)).is_none());
}

#[test]
fn test_logo_ties_keep_document_order() {
    let html = r#"<main><img alt="logo one" src="/1.png"><img alt="logo two" src="/2.png"></main>"#;
    let logo = detect_logo(&doc(html)).expect("logo detected");
    assert_eq!(logo.candidate_value, "https://example.com/1.png");
}

#[test]
fn test_dimension_bonus() {
    let sized = r#"<main><img alt="logo" src="/a.png" width="200" height="60"></main>"#;
    let r#unsized = r#"<main><img alt="logo" src="/a.png"></main>"#;
    let a = score_images(&doc(sized))[0].score;
    let b = score_images(&doc(r#unsized))[0].score;
    assert_eq!(a - b, 10);
}

// Favicon

#[test]
fn test_favicon_order() {
    let html = r#"<link rel="apple-touch-icon" href="/apple.png">
        <link rel="shortcut icon" href="/short.ico">"#;
    assert_eq!(
        resolve_favicon(&doc(html)).as_deref(),
        Some("https://example.com/short.ico")
    );

    let html = r#"<link rel="apple-touch-icon" href="/apple.png">
        <link rel="icon" href="icons/fav.png">"#;
    assert_eq!(
        resolve_favicon(&doc(html)).as_deref(),
        Some("https://example.com/shop/icons/fav.png")
    );
}

#[test]
fn test_favicon_fallback() {
    assert_eq!(
        resolve_favicon(&doc("<p>none</p>")).as_deref(),
        Some("https://example.com/favicon.ico")
    );
    let with_port = Document::parse("<p></p>", "http://127.0.0.1:8080/x/y");
    assert_eq!(
        resolve_favicon(&with_port).as_deref(),
        Some("http://127.0.0.1:8080/favicon.ico")
    );
}

// Fonts

#[test]
fn test_normalize_font_name_strips_suffixes() {
    assert_eq!(
        normalize_font_name("Roboto-Bold"),
        Some(("roboto".to_string(), "Roboto".to_string()))
    );
    assert_eq!(normalize_font_name("'Roboto-Light'").map(|n| n.0), Some("roboto".to_string()));
    assert_eq!(normalize_font_name("\"Open Sans\"").map(|n| n.1), Some("Open Sans".to_string()));
    assert_eq!(normalize_font_name("Montserrat_SemiBold").map(|n| n.1), Some("Montserrat".to_string()));
    assert_eq!(normalize_font_name("Lato-Black-Italic").map(|n| n.1), Some("Lato".to_string()));
    assert_eq!(normalize_font_name("Inter-700").map(|n| n.1), Some("Inter".to_string()));
    assert_eq!(normalize_font_name(" '' "), None);
}

#[test]
fn test_normalize_font_name_keeps_space_separated_family_words() {
    assert_eq!(
        normalize_font_name("Titillium Web"),
        Some(("titillium web".to_string(), "Titillium Web".to_string()))
    );
    assert_eq!(normalize_font_name("'Archivo Black'").map(|n| n.1), Some("Archivo Black".to_string()));
    assert_eq!(normalize_font_name("Archivo Black-Italic").map(|n| n.1), Some("Archivo Black".to_string()));
}

#[test]
fn test_google_families_are_ranked_verbatim() {
    let families = google_font_families(
        "https://fonts.googleapis.com/css2?family=Titillium+Web&family=Archivo+Black",
    );
    let fonts = rank_fonts(&families, 0, std::iter::empty::<&str>());
    assert_eq!(
        fonts,
        vec![
            FontEntry {
                name: "Titillium Web".to_string(),
                weight: 10,
            },
            FontEntry {
                name: "Archivo Black".to_string(),
                weight: 10,
            },
        ]
    );
}

#[test]
fn test_denylists() {
    assert!(is_denied_font("sans-serif", "sans-serif"));
    assert!(is_denied_font("font awesome 5 free", "Font Awesome 5 Free"));
    assert!(is_denied_font("userregistration", "UserRegistration"));
    assert!(is_denied_font("button", "Button"));
    assert!(is_denied_font("mycomponentfont", "myComponentFont"));
    assert!(is_denied_font("ab", "Ab"));
    assert!(is_denied_font("var(--body-font)", "var(--body-font)"));
    assert!(!is_denied_font("roboto", "Roboto"));
    assert!(!is_denied_font("open sans", "Open Sans"));
    assert!(!is_denied_font("arial", "Arial"));
    assert!(is_web_safe_font("arial"));
    assert!(is_system_font("system-ui"));
}

#[test]
fn test_google_font_families() {
    assert_eq!(
        google_font_families(
            "https://fonts.googleapis.com/css2?family=Roboto:wght@400;700&family=Open+Sans&display=swap"
        ),
        vec!["Roboto", "Open Sans"]
    );
    assert_eq!(
        google_font_families("https://fonts.googleapis.com/css?family=Lato|Playfair+Display:400,700"),
        vec!["Lato", "Playfair Display"]
    );
    assert!(google_font_families("not a url").is_empty());
}

#[test]
fn test_css_font_families() {
    let css = "body{font-family: 'Inter', -apple-system, sans-serif} h1 { FONT-FAMILY:\"Lora\" }";
    assert_eq!(
        css_font_families(css),
        vec!["'Inter'", "-apple-system", "sans-serif", "\"Lora\""]
    );
}

#[test]
fn test_suffix_variants_share_one_bucket() {
    let a = "h1 { font-family: 'Roboto', sans-serif; }";
    let b = "h2 { font-family: Roboto-Bold, sans-serif; }";
    let fonts = rank_fonts(&[], 0, [a, b]);
    assert_eq!(
        fonts,
        vec![FontEntry {
            name: "Roboto".to_string(),
            weight: 10,
        }]
    );
}

#[test]
fn test_font_ranking_multiplier() {
    // Arial has more raw weight but custom fonts rank with a 3x multiplier.
    let css = "a{font-family: Arial} b{font-family: Arial} c{font-family: Arial} d{font-family: Lora}";
    let fonts = rank_fonts(&["Poppins".to_string()], 1, [css]);
    let names: Vec<&str> = fonts.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["Poppins", "Adobe Fonts", "Arial", "Lora"]);
    assert_eq!(fonts[0].weight, 10);
    assert_eq!(fonts[1].weight, 8);
    assert_eq!(fonts[2].weight, 15);
}

#[test]
fn test_font_ranking_limit() {
    let css: String = (0..15)
        .map(|i| format!(".c{i}{{font-family: Family{}x}}", "abcdefghijklmno".as_bytes()[i] as char))
        .collect();
    let fonts = rank_fonts(&[], 0, [css.as_str()]);
    assert_eq!(fonts.len(), 10);
}

#[test]
fn test_extract_fonts_uses_first_stylesheets_only() {
    let sources = VisualSources::default();
    let sheets: Vec<FetchedStylesheet> = (0..7)
        .map(|_| sheet("p { font-family: Merriweather }"))
        .collect();
    let fonts = extract_fonts(&sources, &sheets, 5);
    assert_eq!(fonts[0].weight, 25);
}

// Colors

#[test]
fn test_normalize_hex() {
    assert_eq!(normalize_hex("#abc").as_deref(), Some("#AABBCC"));
    assert_eq!(normalize_hex("ff0000").as_deref(), Some("#FF0000"));
    assert_eq!(normalize_hex("#12345"), None);
    assert_eq!(normalize_hex("#ggg"), None);
    assert_eq!(rgb_to_hex(255, 0, 128).as_deref(), Some("#FF0080"));
    assert_eq!(rgb_to_hex(256, 0, 0), None);
}

#[test]
fn test_extract_color_literals() {
    let text = "a{color:#fff;border:1px solid #1A2b3C} b{color: rgb(255, 0, 0)} c{color:rgba(0 0 0 / 50%)}";
    assert_eq!(
        extract_color_literals(text),
        vec!["#FFFFFF", "#1A2B3C", "#FF0000", "#000000"]
    );
    // entities, anchors and 8-digit hex are ignored
    assert!(extract_color_literals("&#123; <a href=\"#top\"> #aabbccdd").is_empty());
}

#[test]
fn test_color_weights_by_source() {
    let html = r#"<html><head><style>h1{color:#333}</style></head>
        <body><div style="color:#ff0000">x</div></body></html>"#;
    let document = doc(html);
    let sources = collect_visual_sources(&document);
    let sheets = vec![sheet("a{color:#333333}"), sheet("b{color:#00f}")];
    let colors = extract_colors(html, &sources, &sheets);

    // #333: html 1 + <style> 3 + css 5
    assert_eq!(colors[0].hex, "#333333");
    assert_eq!(colors[0].weight, 9);
    // #F00: html 1 + inline 4
    let red = colors.iter().find(|c| c.hex == "#FF0000").unwrap();
    assert_eq!(red.weight, 5);
    let blue = colors.iter().find(|c| c.hex == "#0000FF").unwrap();
    assert_eq!(blue.weight, 5);
}

#[test]
fn test_colors_top_six() {
    let css: String = (1..=9).map(|i| format!(".c{i}{{color:#00000{i}}}")).collect();
    let colors = extract_colors("", &VisualSources::default(), &[sheet(&css)]);
    assert_eq!(colors.len(), 6);
    assert_eq!(colors[0].hex, "#000001");
}

// Frequency map

#[test]
fn test_frequency_map_ties_keep_insertion_order() {
    let mut map = FrequencyMap::new();
    map.add("b", "B", 2);
    map.add("a", "A", 3);
    map.add("b", "b-variant", 1);
    map.add("c", "C", 1);
    assert_eq!(map.weight("b"), 3);
    let top: Vec<String> = map.top(3).into_iter().map(|b| b.display).collect();
    assert_eq!(top, vec!["B", "A", "C"]);
}

// Sources

#[test]
fn test_collect_visual_sources() {
    let html = r#"<head>
        <link rel="stylesheet" href="/css/site.css">
        <link rel="stylesheet" href="/css/site.css">
        <link rel="preload" href="/css/later.css">
        <link rel="stylesheet" href="https://fonts.googleapis.com/css2?family=Roboto&family=Lora:ital@1">
        <link rel="stylesheet" href="https://use.typekit.net/abc123.css">
        <script src="https://use.typekit.net/xyz.js"></script>
        <style>body{color:#111}</style><style>  </style>
        </head><body><p style="color:red">x</p></body>"#;
    let sources = collect_visual_sources(&doc(html));
    assert_eq!(sources.stylesheet_urls, vec!["https://example.com/css/site.css"]);
    assert_eq!(sources.google_font_families, vec!["Roboto", "Lora"]);
    assert_eq!(sources.adobe_kits, 2);
    assert_eq!(sources.inline_styles, vec!["color:red"]);
    assert_eq!(sources.style_blocks, vec!["body{color:#111}"]);
}

proptest! {
    #[test]
    fn prop_hex_normalization_idempotent(digits in "[0-9a-fA-F]{6}") {
        let once = normalize_hex(&digits).unwrap();
        prop_assert_eq!(normalize_hex(&once).unwrap(), once);
    }

    #[test]
    fn prop_short_hex_buckets_with_expansion(digits in "[0-9a-fA-F]{3}") {
        let expanded: String = digits.chars().flat_map(|c| [c, c]).collect();
        prop_assert_eq!(normalize_hex(&digits), normalize_hex(&expanded));
    }

    #[test]
    fn prop_font_normalization_idempotent_and_suffix_insensitive(
        base in "[A-Z][a-z]{2,10}",
        suffix in prop::sample::select(vec!["", "-Bold", "-Light", "_Regular", "-Italic", "-SemiBold"]),
    ) {
        let (key, display) = normalize_font_name(&format!("{base}{suffix}")).unwrap();
        prop_assert_eq!(&key, &base.to_lowercase());
        prop_assert_eq!(normalize_font_name(&display), Some((key.clone(), display.clone())));
    }
}
