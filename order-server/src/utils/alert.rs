//! UI 提示响应头
//!
//! The ordering UI shows a toast for every mutation based on these headers:
//!
//! | 事件 | 头 | 值 |
//! |------|----|----|
//! | 成功 | `X-{app}-alert` | `{app}.{entity}.created` / `updated` / `deleted` |
//! | 成功 | `X-{app}-params` | 实体 ID |
//! | 失败 | `X-{app}-error` | `error.{errorKey}` |
//! | 失败 | `X-{app}-params` | 实体名 |

use http::{HeaderMap, HeaderName, HeaderValue};

/// Builds alert headers for one application name
#[derive(Debug, Clone)]
pub struct Alerts {
    app_name: String,
}

impl Alerts {
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }

    pub fn entity_created(&self, entity: &str, id: &str) -> HeaderMap {
        self.alert(&format!("{}.{}.created", self.app_name, entity), id)
    }

    pub fn entity_updated(&self, entity: &str, id: &str) -> HeaderMap {
        self.alert(&format!("{}.{}.updated", self.app_name, entity), id)
    }

    pub fn entity_deleted(&self, entity: &str, id: &str) -> HeaderMap {
        self.alert(&format!("{}.{}.deleted", self.app_name, entity), id)
    }

    /// `default_message` only goes to the log; the UI translates `error_key`
    pub fn failure(&self, entity: &str, error_key: &str, default_message: &str) -> HeaderMap {
        tracing::warn!(entity, error_key, "Entity processing failed, {}", default_message);
        let mut headers = HeaderMap::new();
        self.insert(&mut headers, "error", &format!("error.{error_key}"));
        self.insert(&mut headers, "params", entity);
        headers
    }

    fn alert(&self, message: &str, param: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        self.insert(&mut headers, "alert", message);
        self.insert(&mut headers, "params", param);
        headers
    }

    fn insert(&self, headers: &mut HeaderMap, kind: &str, value: &str) {
        let name = format!("x-{}-{}", self.app_name, kind);
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            (Ok(name), Ok(value)) => {
                headers.insert(name, value);
            }
            _ => tracing::warn!(header = %name, value, "Dropping unrepresentable alert header"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creation_alert() {
        let headers = Alerts::new("orderApp").entity_created("foodOrder", "42");
        assert_eq!(headers.len(), 2);
        assert_eq!(
            headers.get("x-orderapp-alert").unwrap(),
            "orderApp.foodOrder.created"
        );
        assert_eq!(headers.get("x-orderapp-params").unwrap(), "42");
    }

    #[test]
    fn test_update_and_deletion_alerts() {
        let alerts = Alerts::new("backApp");
        assert_eq!(
            alerts.entity_updated("foodOrder", "1").get("x-backapp-alert").unwrap(),
            "backApp.foodOrder.updated"
        );
        assert_eq!(
            alerts.entity_deleted("foodOrder", "1").get("x-backapp-alert").unwrap(),
            "backApp.foodOrder.deleted"
        );
    }

    #[test]
    fn test_failure_alert() {
        let headers = Alerts::new("orderApp").failure(
            "foodOrder",
            "idexists",
            "A new foodOrder cannot already have an ID",
        );
        assert_eq!(headers.get("x-orderapp-error").unwrap(), "error.idexists");
        assert_eq!(headers.get("x-orderapp-params").unwrap(), "foodOrder");
        assert!(headers.get("x-orderapp-alert").is_none());
    }

    #[test]
    fn test_invalid_app_name_drops_headers() {
        let headers = Alerts::new("bad name").entity_created("foodOrder", "1");
        assert!(headers.is_empty());
    }
}
