use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::transport::{ApiRequest, ApiResponse, Method, Transport};

struct Route {
    method: Method,
    path: String,
    replies: VecDeque<Result<ApiResponse, ApiError>>,
}

#[derive(Default)]
struct MockState {
    routes: Vec<Route>,
    requests: Vec<ApiRequest>,
}

/// In-memory transport for tests. Replies are matched on method and path (query string
/// ignored); a route with several queued replies plays them in order and then repeats
/// the last one.
#[derive(Clone, Default)]
pub struct MockTransport {
    state: Rc<RefCell<MockState>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, method: Method, path: &str, status: u16, body: &str) -> &Self {
        self.push(method, path, Ok(ApiResponse::new(status, body)))
    }

    pub fn fail(&self, method: Method, path: &str, reason: &str) -> &Self {
        self.push(method, path, Err(ApiError::Network(reason.to_string())))
    }

    fn push(&self, method: Method, path: &str, reply: Result<ApiResponse, ApiError>) -> &Self {
        let mut state = self.state.borrow_mut();
        let path = ApiConfig::default().url(path);
        match state
            .routes
            .iter_mut()
            .find(|r| r.method == method && r.path == path)
        {
            Some(route) => route.replies.push_back(reply),
            None => state.routes.push(Route {
                method,
                path,
                replies: VecDeque::from([reply]),
            }),
        }
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.state.borrow().requests.clone()
    }

    pub fn last_request(&self) -> Option<ApiRequest> {
        self.state.borrow().requests.last().cloned()
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let mut state = self.state.borrow_mut();
        state.requests.push(request.clone());

        let path = request.url.split('?').next().unwrap_or_default();
        let Some(route) = state
            .routes
            .iter_mut()
            .find(|r| r.method == request.method && r.path == path)
        else {
            return Ok(ApiResponse::new(404, r#"{"message":"not found"}"#));
        };

        if route.replies.len() > 1 {
            route.replies.pop_front().unwrap_or_else(|| {
                Err(ApiError::Network("no reply".to_string()))
            })
        } else {
            route
                .replies
                .front()
                .cloned()
                .unwrap_or_else(|| Err(ApiError::Network("no reply".to_string())))
        }
    }
}
