use axum::extract::FromRef;
use stockroom_db::StockroomDb;

#[derive(Clone)]
pub(crate) struct WebState {
    pub(crate) db: StockroomDb,
}

impl FromRef<WebState> for StockroomDb {
    fn from_ref(input: &WebState) -> Self {
        input.db.clone()
    }
}
