use serde::Serialize;

/// Success envelope shared by every endpoint: `{ "success": true, ...body }`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(flatten)]
    pub body: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(body: T) -> Self {
        return Self {
            success: true,
            body,
        };
    }
}

#[derive(Debug, Serialize)]
pub struct Data<T: Serialize> {
    pub data: T,
}

#[derive(Debug, Serialize)]
pub struct Message {
    pub message: String,
}
