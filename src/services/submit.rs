//! Form submission: validate, post, then navigate or report.

use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::SubmitError;
use crate::model::entry::{Field, GlossaryEntry, Operation};
use crate::model::form::Form;
use crate::services::guard::SubmissionGuard;
use crate::services::navigation::Navigator;
use crate::services::transport::Transport;

/// Knobs that distinguish the save and create flavours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitConfig {
    pub endpoint: String,
    /// Read the hidden id input and send it along.
    pub include_id: bool,
    pub success_route: String,
    /// Map 409 to a duplicate-term message instead of the generic one.
    pub conflict_aware: bool,
}

impl SubmitConfig {
    /// Create-or-update against the save endpoint.
    pub fn save() -> Self {
        Self::save_from(&ClientConfig::default())
    }

    /// Always-create against the new-entry endpoint.
    pub fn create() -> Self {
        Self::create_from(&ClientConfig::default())
    }

    pub fn save_from(cfg: &ClientConfig) -> Self {
        Self {
            endpoint: cfg.save_endpoint.clone(),
            include_id: true,
            success_route: cfg.save_success_route.clone(),
            conflict_aware: true,
        }
    }

    pub fn create_from(cfg: &ClientConfig) -> Self {
        Self {
            endpoint: cfg.create_endpoint.clone(),
            include_id: false,
            success_route: cfg.create_success_route.clone(),
            conflict_aware: false,
        }
    }
}

/// Outcome of a submission that reached a 2xx response.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Submitted {
    pub entry: GlossaryEntry,
    pub operation: Operation,
    pub status: u16,
    pub body: String,
    pub route: String,
}

/// Reads the form, validates it and returns the trimmed entry.
///
/// Fails before any network activity: a missing element is an internal
/// error, a value-less field a validation error.
pub fn read_entry<F: Form + ?Sized>(
    form: &F,
    include_id: bool,
) -> Result<GlossaryEntry, SubmitError> {
    let term_el = form.element(Field::Term.element_id());
    let definition_el = form.element(Field::Definition.element_id());
    let id_el = if include_id {
        Some(form.element(Field::Id.element_id()))
    } else {
        None
    };

    let missing = [
        (Field::Term, term_el.is_none()),
        (Field::Definition, definition_el.is_none()),
        (Field::Id, matches!(id_el, Some(None))),
    ]
    .into_iter()
    .find(|(_, gone)| *gone);

    if let Some((field, _)) = missing {
        return Err(SubmitError::ReferenceMissing {
            element: field.element_id(),
        });
    }

    let term = term_el
        .flatten()
        .ok_or(SubmitError::ValidationMissing(Field::Term))?;
    let definition = definition_el
        .flatten()
        .ok_or(SubmitError::ValidationMissing(Field::Definition))?;

    let id = match id_el.flatten().flatten() {
        Some(id) if !id.is_empty() => Some(id),
        Some(_) | None => {
            if include_id {
                log::debug!("no id set, a new entry will be created");
            }
            None
        }
    };

    Ok(GlossaryEntry::from_form(&term, &definition, id.as_deref()))
}

/// Runs one submission end to end.
///
/// On success the navigator has been pointed at the configured route; on any
/// error it has not been touched.
pub fn submit<F, T, N>(
    cfg: &SubmitConfig,
    guard: &SubmissionGuard,
    form: &F,
    transport: &T,
    navigator: &mut N,
) -> Result<Submitted, SubmitError>
where
    F: Form + ?Sized,
    T: Transport + ?Sized,
    N: Navigator + ?Sized,
{
    let _pending = guard.begin()?;

    log::debug!("validating form for {}", cfg.endpoint);
    let entry = read_entry(form, cfg.include_id)?;
    let operation = if cfg.include_id {
        entry.operation()
    } else {
        Operation::Create
    };

    let payload = if cfg.include_id {
        entry.save_payload()
    } else {
        entry.create_payload()
    };

    log::debug!("sending {} for \"{}\"", operation.as_str(), entry.term);
    let reply = transport.post_json(&cfg.endpoint, &payload).map_err(|e| {
        log::error!("POST {} with glossary entry failed: {e}", cfg.endpoint);
        SubmitError::from(e)
    })?;

    if !reply.is_success() {
        let err = if cfg.conflict_aware && reply.status == 409 {
            SubmitError::Conflict {
                term: entry.term.clone(),
            }
        } else {
            SubmitError::ServerRejected {
                status: reply.status,
                reason: reply.reason().map(str::to_string),
            }
        };
        log::warn!("{} rejected entry: {err}", cfg.endpoint);
        return Err(err);
    }

    log::info!("saved: {}", reply.body);
    navigator.navigate(&cfg.success_route);

    Ok(Submitted {
        entry,
        operation,
        status: reply.status,
        body: reply.body,
        route: cfg.success_route.clone(),
    })
}
