//! CSRF tokens handed out with the upload page.
//!
//! Each page render issues a random token that is embedded in the hidden
//! `_csrf` input. Upload requests must echo a known token in the
//! `X-CSRF-TOKEN` header. Tokens stay valid until evicted by newer ones.

use std::collections::{HashSet, VecDeque};
use std::sync::RwLock;

use uuid::Uuid;

/// Header carrying the token on uploads.
pub const CSRF_HEADER: &str = "x-csrf-token";

/// Placeholder in `index.html` replaced by the issued token.
pub const CSRF_PLACEHOLDER: &str = "{{csrf_token}}";

#[derive(Default)]
struct Issued {
    order: VecDeque<String>,
    known: HashSet<String>,
}

/// Bounded in-memory store of issued tokens.
pub struct CsrfTokens {
    issued: RwLock<Issued>,
    capacity: usize,
}

impl CsrfTokens {
    pub fn new(capacity: usize) -> Self {
        Self {
            issued: RwLock::new(Issued::default()),
            capacity: capacity.max(1),
        }
    }

    /// Issue a fresh token, forgetting the oldest one when full.
    pub fn issue(&self) -> String {
        let token = Uuid::new_v4().simple().to_string();
        let mut issued = self.issued.write().unwrap_or_else(|e| e.into_inner());

        while issued.order.len() >= self.capacity {
            if let Some(oldest) = issued.order.pop_front() {
                issued.known.remove(&oldest);
            }
        }
        issued.order.push_back(token.clone());
        issued.known.insert(token.clone());
        token
    }

    /// Whether `token` was issued and not yet evicted.
    pub fn verify(&self, token: &str) -> bool {
        let issued = self.issued.read().unwrap_or_else(|e| e.into_inner());
        issued.known.contains(token)
    }

    pub fn len(&self) -> usize {
        self.issued.read().unwrap_or_else(|e| e.into_inner()).order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Substitute the token into the page template.
pub fn render_page(template: &str, token: &str) -> String {
    template.replace(CSRF_PLACEHOLDER, token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issued_tokens_verify() {
        let tokens = CsrfTokens::new(8);
        let a = tokens.issue();
        let b = tokens.issue();

        assert_ne!(a, b);
        assert!(tokens.verify(&a));
        assert!(tokens.verify(&b));
        assert!(!tokens.verify("forged"));
        assert!(!tokens.verify(""));
    }

    #[test]
    fn test_oldest_token_evicted() {
        let tokens = CsrfTokens::new(2);
        let first = tokens.issue();
        let second = tokens.issue();
        let third = tokens.issue();

        assert_eq!(tokens.len(), 2);
        assert!(!tokens.verify(&first));
        assert!(tokens.verify(&second));
        assert!(tokens.verify(&third));
    }

    #[test]
    fn test_concurrent_issue_and_verify() {
        let tokens = std::sync::Arc::new(CsrfTokens::new(64));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let tokens = tokens.clone();
                std::thread::spawn(move || {
                    (0..8)
                        .map(|_| tokens.issue())
                        .all(|token| tokens.verify(&token))
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
        assert_eq!(tokens.len(), 32);
    }

    #[test]
    fn test_render_page() {
        let page = render_page(
            r#"<input type="hidden" name="_csrf" value="{{csrf_token}}">"#,
            "abc123",
        );
        assert_eq!(page, r#"<input type="hidden" name="_csrf" value="abc123">"#);
    }
}
