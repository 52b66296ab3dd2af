use axum::extract::rejection::FormRejection;
use axum::extract::{Form, Path, RawQuery, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::Deserialize;
use tracing::{debug, error, info};

use super::AppState;
use crate::parsers::{normalize_instance, DisplayFlags, DisplayOptions};
use crate::{pipeline, render};

// Characters that cannot appear raw in a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

pub async fn index() -> Html<String> {
    Html(render::index_page())
}

#[derive(Debug, Deserialize)]
pub struct InstanceForm {
    instance: Option<String>,
    show_all: Option<String>,
    show_animated: Option<String>,
}

/// Canonical listing URL for an instance, e.g. `/example.social?show_all=on`
pub fn listing_path(instance: &str, options: DisplayOptions) -> String {
    let mut path = format!("/{}", utf8_percent_encode(instance, PATH_SEGMENT));
    let query = options.to_query();
    if !query.is_empty() {
        path.push('?');
        path.push_str(&query);
    }
    path
}

/// Any body that is not a readable form counts as a submission without an
/// instance.
pub async fn instance_form(form: Result<Form<InstanceForm>, FormRejection>) -> Redirect {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            debug!("Unreadable instance form: {}", rejection);
            return Redirect::to("/");
        }
    };

    let Some(instance) = normalize_instance(form.instance.as_deref()) else {
        return Redirect::to("/");
    };

    let flags = DisplayFlags {
        show_all: form.show_all,
        show_animated: form.show_animated,
    };
    Redirect::to(&listing_path(&instance, DisplayOptions::from(&flags)))
}

pub async fn emojo(
    State(state): State<AppState>,
    Path(domain): Path<String>,
    RawQuery(query): RawQuery,
) -> Response {
    let options = DisplayOptions::from_query(query.as_deref());

    match state.source.fetch(&domain).await {
        Ok(records) => {
            let view = pipeline::run(records, &domain, options);
            info!(
                "Listing {} emoji in {} categories for {}",
                view.groups.emoji_count(),
                view.groups.len(),
                domain
            );
            Html(render::listing_page(&view)).into_response()
        }
        Err(e) if e.is_forbidden() => {
            (StatusCode::BAD_GATEWAY, Html(render::forbidden_page(&domain))).into_response()
        }
        Err(e) => {
            info!("Could not list emoji for {}: {}", domain, e);
            (
                StatusCode::BAD_GATEWAY,
                Html(render::oh_no_page(&domain, &e.reason())),
            )
                .into_response()
        }
    }
}

pub async fn no_content() -> StatusCode {
    StatusCode::NO_CONTENT
}

pub async fn code(State(state): State<AppState>) -> Response {
    match state.locator.locate().await {
        Ok(Some(location)) => Redirect::to(&location).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => {
            error!("Failed to locate deployment artifact: {:#}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn css() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        include_str!("../../static/site.css"),
    )
}

pub async fn copy_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        include_str!("../../static/copy.js"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn listing_path_encodes_only_unsafe_characters() {
        assert_eq!(
            listing_path("example.social", DisplayOptions::default()),
            "/example.social"
        );
        assert_eq!(
            listing_path(
                "host:8443",
                DisplayOptions {
                    show_all: true,
                    show_animated: true,
                }
            ),
            "/host:8443?show_all=on&show_animated=on"
        );
        assert_eq!(
            listing_path("a/b c", DisplayOptions::default()),
            "/a%2Fb%20c"
        );
    }
}
