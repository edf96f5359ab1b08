use axum::{
    Form,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use tracing::{debug, info};

use crate::{
    error::AppResult,
    models::{NewPersonForm, Person, PersonForm},
    state::AppState,
};

pub async fn home(State(state): State<AppState>) -> AppResult<Html<String>> {
    let persons = state.persons.get_all_persons().await?;
    debug!(count = persons.len(), "listing persons");

    Ok(Html(state.views.index(&persons)?))
}

pub async fn add_form(State(state): State<AppState>) -> AppResult<Html<String>> {
    debug!("rendering add form");
    Ok(Html(state.views.add(&Person::default())?))
}

pub async fn save_person(
    State(state): State<AppState>,
    Form(form): Form<NewPersonForm>,
) -> AppResult<Response> {
    let saved = state.persons.save_person(Person::from(form)).await?;
    info!(id = ?saved.id, "person created");

    Ok(redirect_home())
}

pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Html<String>> {
    let person = match state.persons.get_person_by_id(id).await? {
        Some(person) => person,
        None => {
            debug!(id, "person not found, rendering blank form");
            Person::default()
        }
    };

    Ok(Html(state.views.edit(&person)?))
}

pub async fn update_person(
    State(state): State<AppState>,
    Form(form): Form<PersonForm>,
) -> AppResult<Response> {
    let saved = state.persons.save_person(Person::from(form)).await?;
    info!(id = ?saved.id, "person updated");

    Ok(redirect_home())
}

pub async fn delete_person(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Response> {
    state.persons.delete_person(id).await?;
    info!(id, "person deleted");

    Ok(redirect_home())
}

fn redirect_home() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, "/")]).into_response()
}
