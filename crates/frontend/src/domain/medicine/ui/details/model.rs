use contracts::medicine::MedicineDto;
use contracts::shared::pagination::DataEnvelope;

use crate::shared::api_error::ApiError;
use crate::shared::http::post_json;

pub async fn save_form(api_base: &str, dto: &MedicineDto) -> Result<MedicineDto, ApiError> {
    let url = format!("{}/api/medicines", api_base);
    let envelope: DataEnvelope<MedicineDto> = post_json(&url, dto).await?;
    Ok(envelope.into_inner())
}
