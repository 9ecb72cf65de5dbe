//! Icon Catalogues
//!
//! Icons offered by the pickers and their Font Awesome classes.

pub const BENEFIT_ICONS: &[&str] = &[
    "fas fa-percentage", "fas fa-chart-line", "fas fa-tools", "fas fa-headset",
    "fas fa-gift", "fas fa-rocket", "fas fa-star", "fas fa-trophy",
    "fas fa-users", "fas fa-clock", "fas fa-shield-alt", "fas fa-bolt",
    "fas fa-heart", "fas fa-thumbs-up", "fas fa-medal", "fas fa-crown",
];

pub const CONTACT_ICONS: &[(&str, &str)] = &[
    ("envelope", "fas fa-envelope"),
    ("phone", "fas fa-phone"),
    ("mobile", "fas fa-mobile-alt"),
    ("telegram", "fab fa-telegram"),
    ("whatsapp", "fab fa-whatsapp"),
    ("instagram", "fab fa-instagram"),
    ("facebook", "fab fa-facebook"),
    ("twitter", "fab fa-twitter"),
    ("linkedin", "fab fa-linkedin"),
    ("youtube", "fab fa-youtube"),
    ("tiktok", "fab fa-tiktok"),
    ("discord", "fab fa-discord"),
    ("map-marker", "fas fa-map-marker-alt"),
    ("clock", "fas fa-clock"),
    ("globe", "fas fa-globe"),
    ("link", "fas fa-link"),
    ("briefcase", "fas fa-briefcase"),
    ("building", "fas fa-building"),
    ("fax", "fas fa-fax"),
];

pub const FEATURE_ICONS: &[&str] = &[
    "check-circle", "check", "star", "shield-alt", "rocket",
    "chart-line", "users", "trophy", "lock", "clock",
    "bolt", "heart", "thumbs-up", "award", "gem",
    "crown", "fire", "lightbulb", "medal", "flag",
];

/// Attachment icon choices with their picker labels
pub const ATTACHMENT_ICONS: &[(&str, &str)] = &[
    ("file-pdf", "📄 File PDF"),
    ("file-image", "🖼️ Immagine"),
    ("file-chart-line", "📊 Grafico"),
    ("file-contract", "📋 Contratto"),
    ("certificate", "🏆 Certificato"),
    ("book", "📚 Manuale"),
    ("shield-alt", "🛡️ Sicurezza"),
];

/// Extensions accepted by the attachment upload
pub const ATTACHMENT_TYPES: &[&str] = &["pdf", "jpg", "jpeg", "png", "gif", "bmp"];

pub fn contact_icon_class(name: &str) -> &'static str {
    CONTACT_ICONS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, class)| *class)
        .unwrap_or("fas fa-circle")
}

pub fn feature_icon_class(name: &str) -> String {
    if FEATURE_ICONS.contains(&name) {
        format!("fas fa-{}", name)
    } else {
        "fas fa-check-circle".to_string()
    }
}

/// Icon for an attachment, by explicit icon name or by file extension
pub fn attachment_icon_class(icon_or_type: &str) -> &'static str {
    match icon_or_type {
        "pdf" | "file-pdf" => "fa-file-pdf",
        "jpg" | "jpeg" | "png" | "gif" | "bmp" | "file-image" => "fa-file-image",
        "file-chart-line" => "fa-chart-line",
        "file-contract" => "fa-file-contract",
        "certificate" => "fa-certificate",
        "book" => "fa-book",
        "shield-alt" => "fa-shield-alt",
        _ => "fa-file",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_fallbacks() {
        assert_eq!(contact_icon_class("telegram"), "fab fa-telegram");
        assert_eq!(contact_icon_class("pigeon"), "fas fa-circle");
        assert_eq!(feature_icon_class("gem"), "fas fa-gem");
        assert_eq!(feature_icon_class("nope"), "fas fa-check-circle");
        assert_eq!(attachment_icon_class("png"), "fa-file-image");
        assert_eq!(attachment_icon_class("zip"), "fa-file");
    }
}
