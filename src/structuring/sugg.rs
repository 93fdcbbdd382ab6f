//! 搜索联想解析
//!
//! 联想接口返回的是一段 JS 调用，形如
//! `window.sogou.sug(["关键词",["联想1","联想2"],["0;0;0;0"],...],-1);`。
//! 取第一个 `[` 到最后一个 `]` 之间的 JSON 数组，第二个元素即为联想词列表，
//! 原样返回其中每一项。

use crate::error::{Result, WechatSogouError};
use serde_json::Value;
use tracing::warn;

/// 解析联想接口响应
pub fn get_sugg(body: &str, keyword: &str) -> Result<Vec<Value>> {
    let start = body.find('[');
    let end = body.rfind(']');
    let payload = match (start, end) {
        (Some(start), Some(end)) if start < end => &body[start..=end],
        _ => {
            return Err(WechatSogouError::Parse(format!(
                "联想响应中没有 JSON 数组: {}",
                body
            )))
        }
    };

    let value: Value = serde_json::from_str(payload)?;
    let items = value
        .as_array()
        .ok_or_else(|| WechatSogouError::Parse("联想响应不是数组".to_string()))?;

    if items.first().and_then(Value::as_str) != Some(keyword) {
        warn!("联想响应的关键词与请求不一致: {:?}", items.first());
    }

    let suggestions = items
        .get(1)
        .and_then(Value::as_array)
        .ok_or_else(|| WechatSogouError::Parse("联想响应缺少联想词列表".to_string()))?;

    Ok(suggestions.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_sugg_from_js_call() {
        let body = r#"window.sogou.sug(["test",["testin","test flight","testing"],["0;0;0;0","0;0;0;0","0;0;0;0"],["","",""],["0","0","0"],"","suglabid_-1"],-1);"#;
        let sugg = get_sugg(body, "test").expect("parse should succeed");
        assert_eq!(sugg, vec![json!("testin"), json!("test flight"), json!("testing")]);
    }

    #[test]
    fn test_get_sugg_bare_array() {
        let sugg = get_sugg(r#"["高考",["高考志愿","高考分数线"]]"#, "高考").expect("parse should succeed");
        assert_eq!(sugg, vec![json!("高考志愿"), json!("高考分数线")]);
    }

    #[test]
    fn test_get_sugg_keeps_nested_items() {
        let sugg = get_sugg(r#"["test",[["a","b"]]]"#, "test").expect("parse should succeed");
        assert_eq!(sugg, vec![json!(["a", "b"])]);
    }

    #[test]
    fn test_get_sugg_invalid_payload() {
        assert!(get_sugg("window.sogou.sug();", "test").is_err());
        assert!(get_sugg(r#"["test"]"#, "test").is_err());
    }
}
