//! I define the root acl bootstrap, which seeds the storage
//! root resource with an operator-configurable default
//! authorization set on first use.
//!

use std::{sync::Arc, task::Poll};

use dyn_problem::Problem;
use futures::future::BoxFuture;
use ldp_vocab::{acl, foaf};
use oxrdf::{Graph, NamedNode, Triple};
use tower::Service;
use tracing::info;
use trellis_space::{
    resource::{kind::InteractionModel, state::ResourceState, uri::ResourceUri},
    service::{ResourceService, ResourceStore},
};

/// A [`Service`] that ensures the storage root resource exists
/// and carries an acl. A missing or deleted root is created as a
/// basic container; a root without acl statements receives the
/// default authorization set. The bootstrap is idempotent, and
/// responds with `true` when it performed any work.
#[derive(Debug)]
pub struct RootInitializer<BS> {
    /// Backing resource store.
    store: Arc<BS>,

    /// Uri of the storage root resource.
    root_uri: ResourceUri,

    /// Operator supplied default acl, overriding the built-in
    /// one.
    default_acl: Option<Graph>,
}

impl<BS> Clone for RootInitializer<BS> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            root_uri: self.root_uri.clone(),
            default_acl: self.default_acl.clone(),
        }
    }
}

impl<BS: ResourceStore> RootInitializer<BS> {
    /// Create a new [`RootInitializer`] over given store and
    /// root uri, with the built-in default acl.
    pub fn new(store: Arc<BS>, root_uri: ResourceUri) -> Self {
        Self {
            store,
            root_uri,
            default_acl: None,
        }
    }

    /// Override the default acl installed on an uncontrolled
    /// root.
    pub fn with_default_acl(mut self, default_acl: Graph) -> Self {
        self.default_acl = Some(default_acl);
        self
    }
}

impl<BS: ResourceStore> Service<()> for RootInitializer<BS> {
    type Response = bool;

    type Error = Problem;

    type Future = BoxFuture<'static, Result<bool, Problem>>;

    #[inline]
    fn poll_ready(&mut self, _cx: &mut std::task::Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, _req: ()) -> Self::Future {
        let store = self.store.clone();
        let root_uri = self.root_uri.clone();
        let default_acl = self.default_acl.clone();

        Box::pin(async move {
            let root_state = store.get(&root_uri).await?;

            let mut initialized = false;
            let root_record = match root_state {
                ResourceState::Existing(record) => Some(record),
                _ => None,
            };

            if root_record.is_none() {
                info!("Creating root container at <{}>.", root_uri);
                store
                    .create_container(root_uri.clone(), InteractionModel::BasicContainer)
                    .await?;
                initialized = true;
            }

            let root_has_acl = root_record.map(|record| record.has_acl()).unwrap_or(false);
            if !root_has_acl {
                info!("Installing default acl on <{}>.", root_uri);
                let acl_graph =
                    default_acl.unwrap_or_else(|| default_root_acl(&root_uri));
                store.replace_acl(root_uri, acl_graph).await?;
                initialized = true;
            }

            Ok(initialized)
        })
    }
}

/// Build the built-in default root acl: all modes for any agent,
/// on the root and inheritable from it.
pub fn default_root_acl(root_uri: &ResourceUri) -> Graph {
    // The root uri with a fragment stays a valid iri.
    let subject = NamedNode::new_unchecked(format!("{}#auth", root_uri.as_str()));
    let root = root_uri.clone().into_named_node();

    let mut graph = Graph::new();
    graph.insert(&Triple::new(
        subject.clone(),
        oxrdf::vocab::rdf::TYPE.into_owned(),
        acl::AUTHORIZATION.into_owned(),
    ));
    graph.insert(&Triple::new(
        subject.clone(),
        acl::AGENT_CLASS.into_owned(),
        foaf::AGENT.into_owned(),
    ));
    for mode in [acl::READ, acl::WRITE, acl::APPEND, acl::CONTROL] {
        graph.insert(&Triple::new(
            subject.clone(),
            acl::MODE.into_owned(),
            mode.into_owned(),
        ));
    }
    graph.insert(&Triple::new(
        subject.clone(),
        acl::ACCESS_TO.into_owned(),
        root.clone(),
    ));
    graph.insert(&Triple::new(subject, acl::DEFAULT.into_owned(), root));

    graph
}

#[cfg(test)]
mod tests {
    use claims::assert_ok;
    use tower::ServiceExt;
    use trellis_access_control::{
        evaluator::{
            impl_::wac::{WacAccessEvaluator, WacEvaluatorConfig},
            AccessEvaluator,
        },
        model::{session::Session, AccessModeSet},
    };
    use trellis_space::service::mock::MockResourceService;

    use super::*;

    fn root() -> ResourceUri {
        ResourceUri::try_new_from("trellis:data/").expect("Claimed valid uri")
    }

    async fn initialize(store: &Arc<MockResourceService>) -> bool {
        let initializer = RootInitializer::new(store.clone(), root());
        assert_ok!(initializer.oneshot(()).await)
    }

    #[tokio::test]
    async fn missing_root_is_created_and_seeded() {
        let store = Arc::new(MockResourceService::new());

        assert!(initialize(&store).await);

        let state = assert_ok!(store.get(&root()).await);
        let record = state.as_existing().expect("Root must exist");
        assert_eq!(record.interaction_model(), InteractionModel::BasicContainer);
        assert!(record.has_acl());
    }

    #[tokio::test]
    async fn bootstrap_is_idempotent() {
        let store = Arc::new(MockResourceService::new());

        assert!(initialize(&store).await);
        assert!(!initialize(&store).await);
    }

    #[tokio::test]
    async fn existing_root_only_receives_an_acl() {
        let store = Arc::new(MockResourceService::new());
        store.insert(trellis_space::resource::ResourceRecord::new(
            root(),
            InteractionModel::BasicContainer,
        ));

        assert!(initialize(&store).await);

        let state = assert_ok!(store.get(&root()).await);
        assert!(state.as_existing().expect("Root must exist").has_acl());
    }

    #[tokio::test]
    async fn seeded_root_grants_the_public_every_mode() {
        let store = Arc::new(MockResourceService::new());
        assert!(initialize(&store).await);

        let evaluator =
            WacAccessEvaluator::new(store.clone(), WacEvaluatorConfig::new(root()));

        let on_root = assert_ok!(
            evaluator
                .access_modes(root(), Session::anonymous())
                .await
        );
        assert_eq!(on_root, AccessModeSet::full());

        // Descendants inherit through the default objects.
        let on_descendant = assert_ok!(
            evaluator
                .access_modes(
                    ResourceUri::try_new_from("trellis:data/container/resource")
                        .expect("Claimed valid uri"),
                    Session::anonymous(),
                )
                .await
        );
        assert_eq!(on_descendant, AccessModeSet::full());
    }

    #[tokio::test]
    async fn operator_supplied_acl_overrides_the_default() {
        let store = Arc::new(MockResourceService::new());

        let subject = NamedNode::new_unchecked("trellis:data/#auth");
        let mut acl_graph = Graph::new();
        acl_graph.insert(&Triple::new(
            subject.clone(),
            acl::AGENT_CLASS.into_owned(),
            foaf::AGENT.into_owned(),
        ));
        acl_graph.insert(&Triple::new(
            subject.clone(),
            acl::MODE.into_owned(),
            acl::READ.into_owned(),
        ));
        acl_graph.insert(&Triple::new(
            subject.clone(),
            acl::ACCESS_TO.into_owned(),
            root().into_named_node(),
        ));
        acl_graph.insert(&Triple::new(
            subject,
            acl::DEFAULT.into_owned(),
            root().into_named_node(),
        ));

        let initializer =
            RootInitializer::new(store.clone(), root()).with_default_acl(acl_graph);
        assert!(assert_ok!(initializer.oneshot(()).await));

        let evaluator =
            WacAccessEvaluator::new(store.clone(), WacEvaluatorConfig::new(root()));
        let granted = assert_ok!(
            evaluator
                .access_modes(root(), Session::anonymous())
                .await
        );
        assert_eq!(granted, AccessModeSet::from(
            trellis_access_control::model::AccessMode::Read
        ));
    }
}
