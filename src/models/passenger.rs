use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

// Данные одного пассажира, привязанные к номеру места
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Passenger {
    pub seat: u32,
    #[validate(length(min = 2, message = "Имя должно содержать минимум 2 символа"))]
    pub first_name: String,
    #[validate(length(min = 2, message = "Фамилия должна содержать минимум 2 символа"))]
    pub last_name: String,
    #[validate(
        length(equal = 11, message = "Номер документа должен состоять из 11 цифр"),
        custom(function = digits_only)
    )]
    pub id_no: String,
    pub gender: Gender,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ContactInfo {
    #[validate(email(message = "Некорректный адрес электронной почты"))]
    pub email: String,
    // 10 цифр без ведущего нуля или 11 цифр
    #[validate(
        length(min = 10, max = 11, message = "Телефон должен содержать 10-11 цифр"),
        custom(function = digits_only)
    )]
    pub phone: String,
}

fn digits_only(value: &str) -> Result<(), ValidationError> {
    if value.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::new("digits_only").with_message("Допустимы только цифры".into()))
    }
}

/// Тело запроса продажи билета.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TicketSaleRequest {
    pub trip_id: String,
    pub seats: Vec<u32>,
    #[validate(nested)]
    pub contact: ContactInfo,
    #[validate(nested)]
    pub passengers: Vec<Passenger>,
}

/// Ответ кассы: код подтверждения приходит только при `ok == true`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketSaleResponse {
    pub ok: bool,
    pub pnr: String,
    pub message: String,
}
