//! Request handlers
//!
//! Endpoints arrive as `{year, month, day}` objects, optionally with
//! `hour`, `minute`, `second`, `nanosecond`. When every endpoint in a
//! request is date-only the request is served with date periods; as soon
//! as one endpoint carries a time, all of them are widened to datetimes.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};
use tempus::{Period, PeriodState};
use tempus_core::{CalendarError, Date, DateTime, DateTimeParts, Moment, TempusError, Unit};
use tempus_locale::{LocaleRegistry, WordsOptions};

use crate::rpc::{RpcError, RpcRequest, RpcResponse};

pub const PROTOCOL_VERSION: &str = "2.0";
pub const SERVER_NAME: &str = "tempus";
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default cap on the number of values a `range` call returns
pub const DEFAULT_RANGE_LIMIT: usize = 10_000;

/// Shared, read-only server state
pub struct Server {
    registry: LocaleRegistry,
    defaults: WordsOptions,
}

impl Server {
    pub fn new(registry: LocaleRegistry, defaults: WordsOptions) -> Self {
        Self { registry, defaults }
    }

    pub fn defaults(&self) -> &WordsOptions {
        &self.defaults
    }

    pub fn handle_request(&self, request: &RpcRequest) -> RpcResponse {
        let result = match request.method.as_str() {
            "initialize" => self.handle_initialize(),
            "initialized" | "ping" => Ok(json!({})),
            "period" => self.handle_period(&request.params),
            "range" => self.handle_range(&request.params),
            "intersect" => self.handle_intersect(&request.params),
            "locales" => self.handle_locales(),
            _ => Err(RpcError::method_not_found(&request.method)),
        };

        match result {
            Ok(r) => RpcResponse::success(request.id.clone(), r),
            Err(e) => {
                tracing::debug!(method = %request.method, code = e.code, message = %e.message, "request failed");
                RpcResponse::failure(request.id.clone(), e)
            }
        }
    }

    fn handle_initialize(&self) -> Result<JsonValue, RpcError> {
        Ok(json!({
            "protocolVersion": PROTOCOL_VERSION,
            "serverInfo": {
                "name": SERVER_NAME,
                "version": SERVER_VERSION,
                "description": "Calendar-aware periods between two points in time"
            },
            "methods": ["period", "range", "intersect", "locales", "ping"],
            "defaults": self.defaults,
        }))
    }

    fn handle_locales(&self) -> Result<JsonValue, RpcError> {
        let locales: Vec<JsonValue> = self
            .registry
            .codes()
            .into_iter()
            .filter_map(|code| {
                self.registry
                    .get(&code)
                    .map(|locale| json!({ "code": code, "name": locale.name() }))
            })
            .collect();
        Ok(json!({ "locales": locales, "default": self.defaults.locale }))
    }

    fn handle_period(&self, params: &Option<JsonValue>) -> Result<JsonValue, RpcError> {
        let params: PeriodParams = parse_params(params)?;
        let options = params.words.resolve(&self.defaults);
        if params.span.has_time() {
            let period = params.span.build::<DateTime>()?;
            describe(&period, &self.registry, &options)
        } else {
            let period = params.span.build::<Date>()?;
            describe(&period, &self.registry, &options)
        }
    }

    fn handle_range(&self, params: &Option<JsonValue>) -> Result<JsonValue, RpcError> {
        let params: RangeParams = parse_params(params)?;
        let unit = Unit::from_name(&params.unit)
            .ok_or_else(|| RpcError::invalid_params(format!("unknown unit '{}'", params.unit)))?;
        let limit = params.limit.unwrap_or(DEFAULT_RANGE_LIMIT);
        let step = params.step.unwrap_or(1);
        if params.span.has_time() {
            let period = params.span.build::<DateTime>()?;
            walk(&period, unit, step, limit)
        } else {
            let period = params.span.build::<Date>()?;
            walk(&period, unit, step, limit)
        }
    }

    fn handle_intersect(&self, params: &Option<JsonValue>) -> Result<JsonValue, RpcError> {
        let params: IntersectParams = parse_params(params)?;
        let options = params.words.resolve(&self.defaults);
        let has_time = params.period.has_time() || params.others.iter().any(SpanParams::has_time);
        if has_time {
            intersect::<DateTime>(&params, &self.registry, &options)
        } else {
            intersect::<Date>(&params, &self.registry, &options)
        }
    }
}

// ========== Parameters ==========

#[derive(Debug, Clone, Copy, Deserialize)]
struct Endpoint {
    year: i32,
    month: u32,
    day: u32,
    hour: Option<u32>,
    minute: Option<u32>,
    second: Option<u32>,
    nanosecond: Option<u32>,
}

impl Endpoint {
    fn has_time(&self) -> bool {
        self.hour.is_some() || self.minute.is_some() || self.second.is_some() || self.nanosecond.is_some()
    }
}

/// Endpoint types the server can build from request parameters
trait FromEndpoint: Moment + Serialize + Sized {
    fn from_endpoint(endpoint: &Endpoint) -> Result<Self, CalendarError>;
}

impl FromEndpoint for Date {
    fn from_endpoint(e: &Endpoint) -> Result<Self, CalendarError> {
        Date::from_ymd(e.year, e.month, e.day)
    }
}

impl FromEndpoint for DateTime {
    fn from_endpoint(e: &Endpoint) -> Result<Self, CalendarError> {
        DateTime::try_from(DateTimeParts {
            year: e.year,
            month: e.month,
            day: e.day,
            hour: e.hour.unwrap_or(0),
            minute: e.minute.unwrap_or(0),
            second: e.second.unwrap_or(0),
            nanosecond: e.nanosecond.unwrap_or(0),
        })
    }
}

#[derive(Debug, Deserialize)]
struct SpanParams {
    start: Endpoint,
    end: Endpoint,
    #[serde(default)]
    absolute: bool,
}

impl SpanParams {
    fn has_time(&self) -> bool {
        self.start.has_time() || self.end.has_time()
    }

    fn build<M: FromEndpoint>(&self) -> Result<Period<M>, RpcError> {
        let state = PeriodState {
            start: M::from_endpoint(&self.start)?,
            end: M::from_endpoint(&self.end)?,
            absolute: self.absolute,
        };
        Ok(Period::from_state(state)?)
    }
}

#[derive(Debug, Default, Deserialize)]
struct WordsParams {
    locale: Option<String>,
    separator: Option<String>,
}

impl WordsParams {
    fn resolve(&self, defaults: &WordsOptions) -> WordsOptions {
        WordsOptions::new(
            self.locale.clone().unwrap_or_else(|| defaults.locale.clone()),
            self.separator.clone().unwrap_or_else(|| defaults.separator.clone()),
        )
    }
}

#[derive(Debug, Deserialize)]
struct PeriodParams {
    #[serde(flatten)]
    span: SpanParams,
    #[serde(flatten)]
    words: WordsParams,
}

#[derive(Debug, Deserialize)]
struct RangeParams {
    #[serde(flatten)]
    span: SpanParams,
    #[serde(default = "default_unit")]
    unit: String,
    step: Option<i64>,
    limit: Option<usize>,
}

fn default_unit() -> String {
    Unit::Days.name().to_string()
}

#[derive(Debug, Deserialize)]
struct IntersectParams {
    period: SpanParams,
    #[serde(default)]
    others: Vec<SpanParams>,
    #[serde(flatten)]
    words: WordsParams,
}

fn parse_params<T: DeserializeOwned>(params: &Option<JsonValue>) -> Result<T, RpcError> {
    let value = params.clone().unwrap_or_else(|| json!({}));
    serde_json::from_value(value).map_err(RpcError::invalid_params)
}

// ========== Results ==========

fn describe<M: FromEndpoint>(
    period: &Period<M>,
    registry: &LocaleRegistry,
    options: &WordsOptions,
) -> Result<JsonValue, RpcError> {
    let words = period.in_words(registry, options)?;
    Ok(json!({
        "start": period.start(),
        "end": period.end(),
        "inverted": period.is_inverted(),
        "absolute": period.is_absolute(),
        "years": period.years(),
        "months": period.months(),
        "weeks": period.weeks(),
        "days": period.days(),
        "days_exclude_weeks": period.days_exclude_weeks(),
        "hours": period.hours(),
        "minutes": period.minutes(),
        "remaining_seconds": period.remaining_seconds(),
        "in_months": period.in_months(),
        "in_weekdays": period.in_weekdays(),
        "in_weekend_days": period.in_weekend_days(),
        "total_seconds": period.total_seconds(),
        "delta": period.calendar_delta(),
        "duration": period.as_duration(),
        "words": words,
        "state": period.state(),
    }))
}

fn walk<M: FromEndpoint>(period: &Period<M>, unit: Unit, step: i64, limit: usize) -> Result<JsonValue, RpcError> {
    let mut values: Vec<M> = period.range_step(unit, step)?.take(limit.saturating_add(1)).collect();
    let truncated = values.len() > limit;
    if truncated {
        values.truncate(limit);
        tracing::info!(unit = %unit, limit, "range truncated");
    }
    Ok(json!({
        "unit": unit,
        "step": step,
        "count": values.len(),
        "truncated": truncated,
        "values": values,
    }))
}

fn intersect<M: FromEndpoint>(
    params: &IntersectParams,
    registry: &LocaleRegistry,
    options: &WordsOptions,
) -> Result<JsonValue, RpcError> {
    let period = params.period.build::<M>()?;
    let others = params
        .others
        .iter()
        .map(SpanParams::build::<M>)
        .collect::<Result<Vec<_>, _>>()?;

    match period.intersect(&others)? {
        Some(overlap) => Ok(json!({ "intersection": describe(&overlap, registry, options)? })),
        None => Ok(json!({ "intersection": JsonValue::Null })),
    }
}

/// Structured error for a line that could not be handled at all
pub fn internal_error(details: impl Into<String>) -> RpcError {
    TempusError::internal(details).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rpc::{DOMAIN_ERROR, INVALID_PARAMS, METHOD_NOT_FOUND};

    fn server() -> Server {
        Server::new(LocaleRegistry::standard(), WordsOptions::default())
    }

    fn call(method: &str, params: JsonValue) -> RpcResponse {
        let request = RpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(json!(1)),
            method: method.to_string(),
            params: Some(params),
        };
        server().handle_request(&request)
    }

    fn result(method: &str, params: JsonValue) -> JsonValue {
        let response = call(method, params);
        assert!(response.error.is_none(), "{:?}", response.error);
        response.result.unwrap()
    }

    fn error(method: &str, params: JsonValue) -> RpcError {
        let response = call(method, params);
        assert!(response.result.is_none());
        response.error.unwrap()
    }

    #[test]
    fn test_initialize_and_ping() {
        let init = result("initialize", json!({}));
        assert_eq!(init["serverInfo"]["name"], SERVER_NAME);
        assert_eq!(init["defaults"]["locale"], "en");
        assert_eq!(result("ping", json!({})), json!({}));
    }

    #[test]
    fn test_unknown_method() {
        assert_eq!(error("bogus", json!({})).code, METHOD_NOT_FOUND);
    }

    #[test]
    fn test_period_dates() {
        let r = result(
            "period",
            json!({
                "start": {"year": 2023, "month": 1, "day": 1},
                "end": {"year": 2024, "month": 3, "day": 15}
            }),
        );
        assert_eq!(r["years"], 1);
        assert_eq!(r["months"], 2);
        assert_eq!(r["in_months"], 14);
        assert_eq!(r["inverted"], false);
        assert_eq!(r["words"], "1 year 2 months 2 weeks");
        assert_eq!(r["start"], json!({"year": 2023, "month": 1, "day": 1}));
    }

    #[test]
    fn test_period_datetimes_and_locale() {
        let r = result(
            "period",
            json!({
                "start": {"year": 2023, "month": 1, "day": 1},
                "end": {"year": 2023, "month": 1, "day": 2, "hour": 3},
                "locale": "fr",
                "separator": ", "
            }),
        );
        assert_eq!(r["hours"], 3);
        assert_eq!(r["words"], "1 jour, 3 heures");
        assert_eq!(r["start"]["hour"], 0);
    }

    #[test]
    fn test_period_absolute_inverted() {
        let r = result(
            "period",
            json!({
                "start": {"year": 2023, "month": 2, "day": 1},
                "end": {"year": 2023, "month": 1, "day": 1},
                "absolute": true
            }),
        );
        assert_eq!(r["inverted"], true);
        assert_eq!(r["start"]["month"], 1);
        assert_eq!(r["state"]["start"]["month"], 2);
    }

    #[test]
    fn test_period_invalid_date() {
        let err = error(
            "period",
            json!({
                "start": {"year": 2023, "month": 2, "day": 30},
                "end": {"year": 2023, "month": 3, "day": 1}
            }),
        );
        assert_eq!(err.code, DOMAIN_ERROR);
        assert_eq!(err.data.unwrap()["code"], "INVALID_DATE");
    }

    #[test]
    fn test_period_unknown_locale() {
        let err = error(
            "period",
            json!({
                "start": {"year": 2023, "month": 1, "day": 1},
                "end": {"year": 2023, "month": 1, "day": 2},
                "locale": "xx"
            }),
        );
        assert_eq!(err.data.unwrap()["code"], "LOCALE_NOT_FOUND");
    }

    #[test]
    fn test_missing_params() {
        assert_eq!(error("period", json!({})).code, INVALID_PARAMS);
    }

    #[test]
    fn test_range_days() {
        let r = result(
            "range",
            json!({
                "start": {"year": 2023, "month": 1, "day": 1},
                "end": {"year": 2023, "month": 1, "day": 5}
            }),
        );
        assert_eq!(r["count"], 5);
        assert_eq!(r["unit"], "days");
        assert_eq!(r["values"][4], json!({"year": 2023, "month": 1, "day": 5}));
    }

    #[test]
    fn test_range_limit() {
        let r = result(
            "range",
            json!({
                "start": {"year": 2023, "month": 1, "day": 1, "hour": 0},
                "end": {"year": 2023, "month": 1, "day": 2},
                "unit": "hour",
                "limit": 10
            }),
        );
        assert_eq!(r["count"], 10);
        assert_eq!(r["truncated"], true);
    }

    #[test]
    fn test_range_errors() {
        let span = json!({
            "start": {"year": 2023, "month": 1, "day": 1},
            "end": {"year": 2023, "month": 1, "day": 5}
        });

        let mut bad_unit = span.clone();
        bad_unit["unit"] = json!("fortnights");
        assert_eq!(error("range", bad_unit).code, INVALID_PARAMS);

        let mut sub_day = span.clone();
        sub_day["unit"] = json!("hours");
        assert_eq!(error("range", sub_day).data.unwrap()["code"], "UNSUPPORTED_UNIT");

        let mut zero_step = span;
        zero_step["step"] = json!(0);
        assert_eq!(error("range", zero_step).data.unwrap()["code"], "INVALID_STEP");
    }

    #[test]
    fn test_intersect() {
        let r = result(
            "intersect",
            json!({
                "period": {
                    "start": {"year": 2023, "month": 1, "day": 1},
                    "end": {"year": 2023, "month": 1, "day": 10}
                },
                "others": [{
                    "start": {"year": 2023, "month": 1, "day": 5},
                    "end": {"year": 2023, "month": 1, "day": 15}
                }]
            }),
        );
        assert_eq!(r["intersection"]["start"]["day"], 5);
        assert_eq!(r["intersection"]["end"]["day"], 10);
        assert_eq!(r["intersection"]["words"], "5 days");
    }

    #[test]
    fn test_intersect_disjoint() {
        let r = result(
            "intersect",
            json!({
                "period": {
                    "start": {"year": 2023, "month": 1, "day": 1},
                    "end": {"year": 2023, "month": 1, "day": 5}
                },
                "others": [{
                    "start": {"year": 2023, "month": 1, "day": 10},
                    "end": {"year": 2023, "month": 1, "day": 15}
                }]
            }),
        );
        assert!(r["intersection"].is_null());
    }

    #[test]
    fn test_locales() {
        let r = result("locales", json!({}));
        assert_eq!(r["locales"].as_array().unwrap().len(), 5);
        assert_eq!(r["locales"][0], json!({"code": "de", "name": "German"}));
        assert_eq!(r["default"], "en");
    }
}
