//! Images analyzer: count, accessibility and hosting of `<img>` elements.

use crate::catalog::CheckId;
use crate::document::{attr, has_attr, Document};
use crate::score::CategoryResult;
use regex::Regex;
use std::sync::LazyLock;

static STYLE_DIMENSIONS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)width\s*:.*height\s*:|height\s*:.*width\s*:")
        .expect("valid dimensions regex")
});

const MAX_IMAGE_COUNT: usize = 15;

pub fn analyze(doc: &Document) -> CategoryResult {
    let mut checks = Vec::new();
    let mut score = 0;

    let images = doc.select("img");
    let image_count = images.len();

    let appropriate_count = image_count > 0 && image_count < MAX_IMAGE_COUNT;
    checks.push(CheckId::ImageCount.result(
        appropriate_count,
        match image_count {
            0 => "Aucune image - Ajoutez des visuels".to_string(),
            n if n < MAX_IMAGE_COUNT => format!("{n} image(s) - Quantité appropriée"),
            n => format!("{n} images - Trop d'images peut ralentir le chargement"),
        },
    ));
    if appropriate_count {
        score += CheckId::ImageCount.weight();
    } else if image_count == 0 {
        score += 10;
    }

    let mut images_with_alt = 0usize;
    let mut images_with_empty_alt = 0usize;
    for img in &images {
        if let Some(alt) = attr(img, "alt") {
            images_with_alt += 1;
            if alt.trim().is_empty() {
                images_with_empty_alt += 1;
            }
        }
    }

    // No images counts as fully covered
    let alt_ratio = if image_count == 0 {
        100.0
    } else {
        images_with_alt as f64 / image_count as f64 * 100.0
    };
    let all_alt = (alt_ratio - 100.0).abs() < f64::EPSILON;
    checks.push(CheckId::ImageAltAttributes.result(
        all_alt,
        if image_count == 0 {
            "Pas d'images".to_string()
        } else if all_alt {
            format!(
                "Toutes les images ont un attribut alt - Excellent ({images_with_empty_alt} vides pour décoratives)"
            )
        } else {
            format!(
                "{images_with_alt}/{image_count} images avec alt - OBLIGATOIRE sur toutes les images"
            )
        },
    ));
    if all_alt {
        score += CheckId::ImageAltAttributes.weight();
    } else if alt_ratio > 80.0 {
        score += 20;
    } else if alt_ratio > 50.0 {
        score += 10;
    }

    let images_with_dimensions = images.iter().filter(|img| has_dimensions(img)).count();
    let dimensions_ratio = if image_count == 0 {
        100.0
    } else {
        images_with_dimensions as f64 / image_count as f64 * 100.0
    };
    let good_dimensions = dimensions_ratio > 80.0;
    checks.push(CheckId::ImageDimensions.result(
        good_dimensions,
        if image_count == 0 {
            "Pas d'images".to_string()
        } else {
            format!(
                "{images_with_dimensions}/{image_count} images avec dimensions - {}",
                if good_dimensions {
                    "Excellent"
                } else {
                    "Spécifiez width et height"
                }
            )
        },
    ));
    if good_dimensions {
        score += CheckId::ImageDimensions.weight();
    } else if dimensions_ratio > 50.0 {
        score += 10;
    }

    let mut external_images = 0usize;
    let mut base64_images = 0usize;
    for img in &images {
        if let Some(src) = attr(img, "src") {
            if src.starts_with("http://") || src.starts_with("https://") {
                external_images += 1;
            } else if src.starts_with("data:") {
                base64_images += 1;
            }
        }
    }

    let all_hosted = external_images == image_count && base64_images == 0;
    checks.push(CheckId::ImageHosting.result(
        all_hosted,
        if image_count == 0 {
            "Pas d'images".to_string()
        } else if external_images == image_count {
            "Toutes les images sont hébergées en ligne - Excellent".to_string()
        } else if base64_images > 0 {
            format!("{base64_images} image(s) Base64 - Hébergez-les en ligne pour réduire le poids")
        } else {
            format!(
                "{} image(s) locales - Utilisez des URLs absolues (https://)",
                image_count - external_images
            )
        },
    ));
    if image_count == 0 || all_hosted {
        score += CheckId::ImageHosting.weight();
    } else if base64_images == 0 {
        score += 15;
    }

    CategoryResult::new(score, checks)
}

/// Dimensions are specified either via width/height attributes or via an
/// inline style carrying both properties.
fn has_dimensions(img: &kuchiki::NodeDataRef<kuchiki::ElementData>) -> bool {
    if has_attr(img, "width") && has_attr(img, "height") {
        return true;
    }
    attr(img, "style").is_some_and(|style| STYLE_DIMENSIONS.is_match(&style))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(html: &str) -> Document {
        Document::parse(html)
    }

    fn analyze_html(html: &str) -> CategoryResult {
        analyze(&doc(html))
    }

    #[test]
    fn test_no_images_gets_partial_count_and_full_hosting() {
        let result = analyze_html("<html><body><p>Texte</p></body></html>");
        // count +10, alt +30, dimensions +20, hosting +30
        assert_eq!(result.score, 90);
        let count_check = &result.checks[0];
        assert!(!count_check.pass);
        assert!(count_check.description.contains("Aucune image"));
    }

    #[test]
    fn test_fully_specified_images_score_max() {
        let html = r#"<html><body>
<img src="https://cdn.test/a.png" alt="Logo" width="200" height="80">
<img src="https://cdn.test/b.png" alt="" width="600" height="300">
</body></html>"#;
        let result = analyze_html(html);
        assert_eq!(result.score, 100);
        let alt_check = &result.checks[1];
        assert!(alt_check.description.contains("(1 vides pour décoratives)"));
    }

    #[test]
    fn test_missing_alt_is_flagged() {
        let html = r#"<html><body>
<img src="https://cdn.test/a.png" alt="ok">
<img src="https://cdn.test/b.png">
</body></html>"#;
        let result = analyze_html(html);
        let alt_check = &result.checks[1];
        assert!(!alt_check.pass);
        assert!(alt_check.description.contains("1/2 images avec alt"));
    }

    #[test]
    fn test_base64_image_fails_hosting() {
        let html = r#"<html><body><img src="data:image/gif;base64,R0lGOD" alt="x"></body></html>"#;
        let result = analyze_html(html);
        let hosting = &result.checks[3];
        assert!(!hosting.pass);
        assert!(hosting.description.contains("1 image(s) Base64"));
    }

    #[test]
    fn test_relative_src_fails_hosting_with_partial_credit() {
        let html = r#"<html><body><img src="images/local.png" alt="x" width="10" height="10"></body></html>"#;
        let result = analyze_html(html);
        let hosting = &result.checks[3];
        assert!(!hosting.pass);
        assert!(hosting.description.contains("1 image(s) locales"));
    }

    #[test]
    fn test_style_dimensions_accepted() {
        let html = r#"<html><body><img src="https://cdn.test/a.png" alt="x" style="width:100px;height:40px"></body></html>"#;
        let result = analyze_html(html);
        let dims = &result.checks[2];
        assert!(dims.pass);
    }

    #[test]
    fn test_too_many_images() {
        let imgs: String = (0..16)
            .map(|i| format!(r#"<img src="https://cdn.test/{i}.png" alt="i" width="1" height="1">"#))
            .collect();
        let result = analyze_html(&format!("<html><body>{imgs}</body></html>"));
        let count_check = &result.checks[0];
        assert!(!count_check.pass);
        assert!(count_check.description.contains("16 images"));
    }
}
