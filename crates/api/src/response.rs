//! Success envelope: every 2xx body is `{ "data": ... }`.

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    /// 200 with `data`.
    pub fn ok(data: T) -> Json<Self> {
        Json(Self { data })
    }

    /// 201 with the newly created resource.
    pub fn created(data: T) -> (StatusCode, Json<Self>) {
        (StatusCode::CREATED, Json(Self { data }))
    }
}
