use std::sync::Arc;

use graphbind_application::ports::registry::{BINDER_IMPLEMENTATIONS, BinderEntry};
use graphbind_domain::error::Result;
use graphbind_domain::ports::{Activator, Binder};

use crate::bootstrap::bootstrap_binder;
use crate::config::active_config;
use crate::constants::GRAPH_BINDER_NAME;

/// The configuration-graph binder
#[linkme::distributed_slice(BINDER_IMPLEMENTATIONS)]
pub static GRAPH_BINDER: BinderEntry = BinderEntry {
    name: GRAPH_BINDER_NAME,
    description: "Binds the application described by the home directory and module documents",
    factory: graph_binder_factory,
};

fn graph_binder_factory(
    application_type: &str,
    activator: Arc<dyn Activator>,
) -> Result<Arc<dyn Binder>> {
    let config = active_config()?;
    let binder = bootstrap_binder(&config, application_type, activator)?;
    Ok(Arc::new(binder))
}
