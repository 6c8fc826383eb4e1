use super::*;

#[post("/uploads/presign", format = "application/json", data = "<req>")]
pub async fn post_presign(
    storage: &State<Storage>,
    req: JsonResult<'_, json::PresignRequest>,
) -> Result<json::PresignResponse> {
    let req = req?.into_inner();
    let presigned =
        usecases::presign_upload(&***storage, &req.filename, &req.content_type, req.size).await?;
    Ok(Json(json::PresignResponse {
        url: presigned.url,
        key: presigned.key,
    }))
}
