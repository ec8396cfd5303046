use std::sync::Arc;

use graphbind_application::ports::registry::resolve_binder;
use graphbind_domain::error::{Error, Result};
use graphbind_domain::ports::{Activator, Binder};
use tracing::{debug, info};

use crate::config::AppConfig;

/// Chooses the binder implementation for an application
///
/// Precedence, highest first: the explicit override, the configured
/// `binder.implementation`, then the caller's default.
#[derive(Debug, Clone, Default)]
pub struct BinderSelector {
    override_binder: Option<String>,
    configured: Option<String>,
}

impl BinderSelector {
    /// Selector with no configured binder
    pub fn new() -> Self {
        Self::default()
    }

    /// Selector reading `binder.implementation` from `config`
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            override_binder: None,
            configured: config.binder.implementation.clone(),
        }
    }

    /// Force a binder regardless of configuration
    pub fn with_override(mut self, name: impl Into<String>) -> Self {
        self.override_binder = Some(name.into());
        self
    }

    /// Name of the binder that would be used
    pub fn choose(&self, default_binder: Option<&str>) -> Result<String> {
        let (name, source) = if let Some(name) = &self.override_binder {
            (name.as_str(), "override")
        } else if let Some(name) = &self.configured {
            (name.as_str(), "configuration")
        } else if let Some(name) = default_binder {
            (name, "default")
        } else {
            return Err(Error::configuration(
                "Binder implementation not set and no default was given",
            ));
        };
        debug!(binder = name, source, "Binder implementation chosen");
        Ok(name.to_string())
    }

    /// Construct the chosen binder for `application_type`
    ///
    /// Unknown names and failing binder construction are both
    /// [`Error::Configuration`] naming the binder, with the underlying
    /// error as source.
    pub fn for_application(
        &self,
        application_type: &str,
        default_binder: Option<&str>,
        activator: Arc<dyn Activator>,
    ) -> Result<Arc<dyn Binder>> {
        let name = self.choose(default_binder)?;
        info!(binder = %name, application_type, "Creating binder");
        resolve_binder(&name, application_type, activator).map_err(|e| {
            Error::configuration_with_source(
                format!("Error instantiating binder implementation {name}"),
                e,
            )
        })
    }
}

/// Construct a binder using the process configuration
///
/// Shorthand for [`BinderSelector::from_config`] followed by
/// [`BinderSelector::for_application`], with `override_binder` taking
/// precedence over everything else.
pub fn for_application(
    config: &AppConfig,
    application_type: &str,
    default_binder: Option<&str>,
    activator: Arc<dyn Activator>,
    override_binder: Option<&str>,
) -> Result<Arc<dyn Binder>> {
    let mut selector = BinderSelector::from_config(config);
    if let Some(name) = override_binder {
        selector = selector.with_override(name);
    }
    selector.for_application(application_type, default_binder, activator)
}
