//! I define the access enforcement filter: a middleware layer
//! that classifies inbound requests, queries the access-control
//! evaluator, and either forwards the request or aborts it with
//! an authentication challenge or a forbidden response. On the
//! response path it advertises the acl endpoint and the resolved
//! access modes.
//!

use std::{
    fmt::Debug,
    sync::Arc,
    task::{Context, Poll},
};

use futures::future::BoxFuture;
use http::{
    header::{HeaderName, HeaderValue, LINK, WWW_AUTHENTICATE},
    Method, Request, Response, StatusCode,
};
use tower::{Layer, Service};
use tracing::{debug, error, warn};
use trellis_access_control::{
    evaluator::AccessEvaluator,
    model::{session::Session, AccessModeSet},
};
use trellis_space::resource::uri::ResourceUri;

use self::classify::{has_acl_ext, AccessClassifier, RequiredMode};
use crate::{challenge::Challenge, config::AccessControlConfig, header::wac_allow::WacAllow};

pub mod classify;

/// The `WAC-Allow` header field name.
static WAC_ALLOW: HeaderName = HeaderName::from_static("wac-allow");

/// Configuration of the enforcement filter.
#[derive(Debug, Clone)]
pub struct WebAcFilterConfig {
    /// Classifier of requests into required modes.
    pub classifier: AccessClassifier,

    /// Iri prefix prepended to request paths to form target
    /// uris.
    pub data_prefix: String,

    /// Challenges emitted on `401 Unauthorized` responses.
    pub challenges: Vec<Challenge>,
}

impl From<&AccessControlConfig> for WebAcFilterConfig {
    fn from(config: &AccessControlConfig) -> Self {
        Self {
            classifier: AccessClassifier::new_extended(
                &config.webac.readable_methods,
                &config.webac.writable_methods,
                &config.webac.appendable_methods,
            ),
            data_prefix: config.data.prefix.clone(),
            challenges: config.challenges(),
        }
    }
}

/// Typed request extension carrying the access modes resolved
/// for the session, for downstream handlers to further restrict
/// behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedAccessModes(pub AccessModeSet);

/// A [`Layer`] producing [`WebAcService`] middlewares over given
/// evaluator and filter configuration.
pub struct WebAcLayer<E: ?Sized> {
    /// Access evaluator.
    evaluator: Arc<E>,

    /// Filter configuration.
    config: Arc<WebAcFilterConfig>,
}

impl<E: ?Sized> Clone for WebAcLayer<E> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            evaluator: self.evaluator.clone(),
            config: self.config.clone(),
        }
    }
}

impl<E: ?Sized> Debug for WebAcLayer<E> {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebAcLayer").finish()
    }
}

impl<E: ?Sized> WebAcLayer<E> {
    /// Create a new [`WebAcLayer`] over given evaluator and
    /// filter configuration.
    #[inline]
    pub fn new(evaluator: Arc<E>, config: Arc<WebAcFilterConfig>) -> Self {
        Self { evaluator, config }
    }
}

impl<S, E: ?Sized> Layer<S> for WebAcLayer<E> {
    type Service = WebAcService<S, E>;

    #[inline]
    fn layer(&self, inner: S) -> Self::Service {
        WebAcService {
            inner,
            evaluator: self.evaluator.clone(),
            config: self.config.clone(),
        }
    }
}

/// A middleware [`Service`] enforcing web access control over an
/// inner service.
pub struct WebAcService<S, E: ?Sized> {
    /// Inner service.
    inner: S,

    /// Access evaluator.
    evaluator: Arc<E>,

    /// Filter configuration.
    config: Arc<WebAcFilterConfig>,
}

impl<S: Clone, E: ?Sized> Clone for WebAcService<S, E> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            evaluator: self.evaluator.clone(),
            config: self.config.clone(),
        }
    }
}

impl<S: Debug, E: ?Sized> Debug for WebAcService<S, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebAcService")
            .field("inner", &self.inner)
            .finish()
    }
}

impl<S, E, ReqBody, ResBody> Service<Request<ReqBody>> for WebAcService<S, E>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>> + Clone + Send + 'static,
    S::Future: Send,
    S::Error: Send + 'static,
    E: AccessEvaluator + ?Sized,
    ReqBody: Send + 'static,
    ResBody: Default + 'static,
{
    type Response = Response<ResBody>;

    type Error = S::Error;

    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    #[inline]
    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<ReqBody>) -> Self::Future {
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);
        let evaluator = self.evaluator.clone();
        let config = self.config.clone();

        Box::pin(async move {
            let required = config.classifier.classify(&req);
            let is_acl_request = has_acl_ext(req.uri());
            let is_read_request = matches!(*req.method(), Method::GET | Method::HEAD);
            let request_path = req.uri().path().to_owned();

            // Unrecognized methods pass without authorization,
            // but their responses still advertise the acl
            // endpoint.
            if required.is_empty() {
                let mut response = inner.call(req).await?;
                if response.status().is_success() && !is_acl_request {
                    append_acl_link(&mut response, &request_path);
                }
                return Ok(response);
            }

            let target = match ResourceUri::try_new_from(&format!(
                "{}{}",
                config.data_prefix,
                request_path.trim_start_matches('/')
            )) {
                Ok(target) => target,
                Err(e) => {
                    warn!(
                        "Request path does not form a valid target uri. Error:\n {}",
                        e
                    );
                    return Ok(plain_response(StatusCode::BAD_REQUEST));
                }
            };

            // An upstream authentication filter may have injected
            // a session. Absent that, the session is anonymous.
            let session = req
                .extensions()
                .get::<Session>()
                .cloned()
                .unwrap_or_else(Session::anonymous);

            let granted = match evaluator
                .access_modes(target.clone(), session.clone())
                .await
            {
                Ok(granted) => granted,
                Err(e) => {
                    error!("Error in resolving access modes. Error:\n {}", e);
                    return Ok(plain_response(StatusCode::INTERNAL_SERVER_ERROR));
                }
            };

            if !required.iter().all(|mode| mode.is_satisfied_by(granted)) {
                debug!(
                    "Session of {} lacks {:?} on <{}>.",
                    session.agent(),
                    required,
                    target
                );
                return Ok(deny_response(&session, &config.challenges));
            }

            req.extensions_mut().insert(ResolvedAccessModes(granted));

            // Resolve the public grants for the wac-allow
            // advertisement before forwarding.
            let public_modes = if is_read_request {
                if session.is_anonymous() {
                    Some(granted)
                } else {
                    match evaluator.access_modes(target, Session::anonymous()).await {
                        Ok(public_modes) => Some(public_modes),
                        Err(e) => {
                            warn!("Error in resolving public access modes. Error:\n {}", e);
                            None
                        }
                    }
                }
            } else {
                None
            };

            let mut response = inner.call(req).await?;

            if response.status().is_success() && !is_acl_request {
                append_acl_link(&mut response, &request_path);

                if let Some(public_modes) = public_modes {
                    response
                        .headers_mut()
                        .insert(&WAC_ALLOW, WacAllow::new(granted, public_modes).to_header_value());
                }
            }

            Ok(response)
        })
    }
}

/// Advertise the acl endpoint of the resource at given path.
fn append_acl_link<B>(response: &mut Response<B>, request_path: &str) {
    if let Ok(link) = HeaderValue::from_str(&format!("<{}?ext=acl>; rel=\"acl\"", request_path)) {
        response.headers_mut().append(LINK, link);
    }
}

fn plain_response<B: Default>(status: StatusCode) -> Response<B> {
    Response::builder()
        .status(status)
        .body(B::default())
        .expect("Must be valid")
}

fn deny_response<B: Default>(session: &Session, challenges: &[Challenge]) -> Response<B> {
    if session.is_anonymous() {
        let mut response = plain_response(StatusCode::UNAUTHORIZED);
        for challenge in challenges {
            if let Some(value) = challenge.to_header_value() {
                response.headers_mut().append(WWW_AUTHENTICATE, value);
            }
        }
        response
    } else {
        plain_response(StatusCode::FORBIDDEN)
    }
}
