use crate::server::catalog;
use crate::server::model::table::FreeTableResponse;
use crate::server::model::STATUS_OK;
use actix_web::{get, post, web, Responder};
use log::info;

#[get("/api/tables")]
/// get tables
pub(crate) async fn get_tables() -> impl Responder {
    web::Json(catalog::tables())
}

#[post("/api/tables/{table_id}/free")]
/// release a table, always acknowledged
pub(crate) async fn post_free_table(table_id: web::Path<i64>) -> impl Responder {
    let table_id = table_id.into_inner();
    info!("freeing table={}", table_id);
    web::Json(FreeTableResponse {
        status: STATUS_OK,
        table_id,
    })
}

#[cfg(test)]
mod test {
    use actix_web::http::StatusCode;
    use actix_web::test;
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn tables_are_fixed() {
        let app = init_app!("http://127.0.0.1:1");
        let req = test::TestRequest::get().uri("/api/tables").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(
            body,
            json!([
                {"id": 1, "ad": "Masa 1", "status": "free"},
                {"id": 2, "ad": "Masa 2", "status": "busy"},
            ])
        );
    }

    #[actix_web::test]
    async fn free_table_echoes_id() {
        let app = init_app!("http://127.0.0.1:1");
        for id in [5_i64, 0, -3, 9_000_000_000] {
            let req = test::TestRequest::post()
                .uri(&format!("/api/tables/{}/free", id))
                .to_request();
            let body: Value = test::call_and_read_body_json(&app, req).await;
            assert_eq!(body, json!({"status": "ok", "table_id": id}));
        }
    }

    #[actix_web::test]
    async fn free_table_needs_integer_id() {
        let app = init_app!("http://127.0.0.1:1");
        let req = test::TestRequest::post()
            .uri("/api/tables/masa/free")
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = test::read_body_json(res).await;
        assert!(body["detail"].as_str().is_some_and(|d| !d.is_empty()));
    }
}
