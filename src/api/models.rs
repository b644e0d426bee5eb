use serde::Serialize;
use serde_json::{Map, Value};

pub const DASHBOARD_STATS_PATH: &str = "/api/dashboard/stats";
pub const PIPELINE_PATH: &str = "/api/pipeline";
pub const AGENTS_PATH: &str = "/api/agents";
pub const APPROVALS_PATH: &str = "/api/approvals";
pub const ANALYTICS_REVENUE_PATH: &str = "/api/analytics/revenue";
pub const ANALYTICS_COSTS_PATH: &str = "/api/analytics/costs";

/// Dashboard snapshot, read field by field so that one field of an
/// unexpected type (or `null`) only loses that field.
#[derive(Debug, Clone, Default)]
pub struct DashboardStats {
    pub queue: Option<Map<String, Value>>,
    pub outbox: Option<Map<String, Value>>,
    pub runs: Option<Map<String, Value>>,
    pub recent_runs: Option<Vec<Value>>,
    pub costs: Option<CostSummary>,
}

#[derive(Debug, Clone, Default)]
pub struct CostSummary {
    pub total_usd: Option<f64>,
    pub count: Option<u64>,
}

impl DashboardStats {
    pub fn from_payload(payload: &Value) -> Self {
        let section = |name: &str| payload.get(name).and_then(Value::as_object).cloned();
        Self {
            queue: section("queue"),
            outbox: section("outbox"),
            runs: section("runs"),
            recent_runs: payload
                .get("recent_runs")
                .and_then(Value::as_array)
                .cloned(),
            costs: payload
                .get("costs")
                .filter(|costs| costs.is_object())
                .map(CostSummary::from_payload),
        }
    }
}

impl CostSummary {
    pub fn from_payload(costs: &Value) -> Self {
        let count = costs.get("count").and_then(|count| {
            count.as_u64().or_else(|| {
                count
                    .as_f64()
                    .filter(|n| n.fract() == 0.0 && *n >= 0.0)
                    .map(|n| n as u64)
            })
        });
        Self {
            total_usd: costs.get("total_usd").and_then(Value::as_f64),
            count,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AnalyticsData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revenue: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub costs: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_body_is_empty_stats() {
        let stats = DashboardStats::from_payload(&Value::Null);
        assert!(stats.queue.is_none());
        assert!(stats.costs.is_none());
        assert!(stats.recent_runs.is_none());
    }

    #[test]
    fn test_bad_section_only_drops_itself() {
        let stats = DashboardStats::from_payload(&json!({
            "queue": "not-an-object",
            "outbox": {"queued": 2},
            "recent_runs": null
        }));
        assert!(stats.queue.is_none());
        assert_eq!(stats.outbox.unwrap()["queued"], 2);
        assert!(stats.recent_runs.is_none());
    }

    #[test]
    fn test_costs_tolerate_null_and_float_count() {
        let costs = CostSummary::from_payload(&json!({"total_usd": null, "count": 3.0}));
        assert_eq!(costs.total_usd, None);
        assert_eq!(costs.count, Some(3));

        let costs = CostSummary::from_payload(&json!({"total_usd": 1.25, "count": "three"}));
        assert_eq!(costs.total_usd, Some(1.25));
        assert_eq!(costs.count, None);
    }
}
