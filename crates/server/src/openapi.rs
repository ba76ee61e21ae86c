use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(utoipa::ToSchema)]
pub struct AddressDoc { pub city: String, pub state: String }

#[derive(utoipa::ToSchema)]
pub struct CreateCompanyDoc {
    pub name: String,
    pub cnpj: String,
    pub sector: String,
    pub address: AddressDoc,
}

#[derive(utoipa::ToSchema)]
pub struct UpdateCompanyDoc {
    pub name: Option<String>,
    pub sector: Option<String>,
    pub address: Option<AddressDoc>,
}

#[derive(utoipa::ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct CreateEmployeeDoc {
    pub company_id: String,
    pub email: String,
    pub name: String,
    pub password: String,
    pub role: String,
    pub status: Option<String>,
    pub termination_date: Option<String>,
}

#[derive(utoipa::ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct UpdateEmployeeDoc {
    pub email: Option<String>,
    pub name: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
    pub status: Option<String>,
    pub termination_date: Option<String>,
}

#[derive(utoipa::ToSchema)]
pub struct ErrorBodyDoc {
    pub code: u16,
    pub message: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::companies::create,
        crate::routes::companies::find,
        crate::routes::companies::find_by_id,
        crate::routes::companies::find_employees,
        crate::routes::companies::update,
        crate::routes::companies::delete,
        crate::routes::employees::create,
        crate::routes::employees::find,
        crate::routes::employees::find_by_id,
        crate::routes::employees::update,
        crate::routes::employees::delete,
    ),
    components(
        schemas(
            HealthResponse,
            AddressDoc,
            CreateCompanyDoc,
            UpdateCompanyDoc,
            CreateEmployeeDoc,
            UpdateEmployeeDoc,
            ErrorBodyDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "companies"),
        (name = "employees")
    )
)]
pub struct ApiDoc;
