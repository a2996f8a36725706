use chardetng::EncodingDetector;
use encoding_rs::Encoding;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedPage {
    pub text: String,
    pub encoding_label: String,
    /// Set when malformed sequences were replaced with U+FFFD.
    pub had_errors: bool,
}

/// Decode raw bytes into UTF-8 using: BOM -> Content-Type charset -> chardetng fallback.
/// Malformed input is replaced rather than rejected.
pub fn decode_body(bytes: &[u8], content_type: Option<&str>) -> DecodedPage {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return decode_with(bytes, encoding);
    }

    if let Some(label) = content_type.and_then(extract_charset) {
        if let Some(enc) = Encoding::for_label(label.as_bytes()) {
            return decode_with(bytes, enc);
        }
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let enc = detector.guess(None, true);
    decode_with(bytes, enc)
}

fn extract_charset(content_type: &str) -> Option<String> {
    content_type
        .split(';')
        .filter_map(|part| {
            let (key, value) = part.trim().split_once('=')?;
            key.trim()
                .eq_ignore_ascii_case("charset")
                .then(|| value.trim_matches(&[' ', '"', '\''][..]).to_string())
        })
        .next()
}

fn decode_with(bytes: &[u8], enc: &'static Encoding) -> DecodedPage {
    let (text, used, had_errors) = enc.decode(bytes);
    DecodedPage {
        text: text.into_owned(),
        encoding_label: used.name().to_string(),
        had_errors,
    }
}
