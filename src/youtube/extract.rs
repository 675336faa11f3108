use serde_json::Value;

/// Assignments of the initial data blob seen on the results page, most
/// specific first.
pub const INITIAL_DATA_MARKERS: [&str; 4] = [
    "var ytInitialData = ",
    "window[\"ytInitialData\"] = ",
    "window.ytInitialData = ",
    "ytInitialData = ",
];

const RENDERER_KEY: &str = "videoRenderer";
const VIDEO_ID_KEY: &str = "videoId";

/// Extracts the JSON object assigned right after `marker`.
///
/// Takes the span from the first `{` after the marker to the brace that
/// balances it. Braces inside string literals are counted as well. The span
/// is parsed as is and, failing that, once more with `&quot;` and `&amp;`
/// unescaped.
pub fn extract_json_block(html: &str, marker: &str) -> Option<Value> {
    let start = html.find(marker)?;
    let open = start + html[start..].find('{')?;

    let mut depth = 0usize;
    let mut end = None;
    for (offset, byte) in html.as_bytes()[open..].iter().enumerate() {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    end = Some(open + offset + 1);
                    break;
                }
            }
            _ => {}
        }
    }

    let span = &html[open..end?];
    serde_json::from_str(span).ok().or_else(|| {
        let unescaped = span.replace("&quot;", "\"").replace("&amp;", "&");
        serde_json::from_str(&unescaped).ok()
    })
}

/// Tries every marker in order and returns the first non-empty blob.
pub fn extract_initial_data(html: &str) -> Option<Value> {
    INITIAL_DATA_MARKERS
        .iter()
        .filter_map(|marker| extract_json_block(html, marker))
        .find(has_content)
}

/// Walks `root` in document order and returns the id of the first video
/// renderer that carries a non-empty `videoId`.
pub fn first_video_id(root: &Value) -> Option<String> {
    match root {
        Value::Object(map) => {
            let id = map
                .get(RENDERER_KEY)
                .and_then(|renderer| renderer.get(VIDEO_ID_KEY))
                .and_then(Value::as_str)
                .filter(|id| !id.is_empty());
            if let Some(id) = id {
                return Some(id.to_string());
            }
            map.values().find_map(first_video_id)
        }
        Value::Array(items) => items.iter().find_map(first_video_id),
        _ => None,
    }
}

fn has_content(value: &Value) -> bool {
    match value {
        Value::Object(map) => !map.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Null => false,
        _ => true,
    }
}
