// tests/support/fixtures.rs
use std::sync::Arc;

use chrono::Utc;
use once_cell::sync::Lazy;

use blogcore::AppConfig;
use blogcore::application::dto::AuthenticatedUser;
use blogcore::application::events::{
    CacheInvalidationSubscriber, SyncEventDispatcher, TagLinkCascadeSubscriber,
};
use blogcore::application::ports::events::EventPublisher;
use blogcore::application::services::{ApplicationPorts, ApplicationServices};
use blogcore::domain::user::entity::NewUser;
use blogcore::domain::user::repository::UserRepository;
use blogcore::domain::user::value_objects::{GitHubId, UserId, Username};
use blogcore::infrastructure::InMemoryCache;

use super::mocks::{
    InMemoryArticleRepo, InMemoryCategoryRepo, InMemoryCommentRepo, InMemoryTagRepo,
    InMemoryUserRepo, ManualClock, RecordingSubscriber,
};

/// Fully wired application over in-memory ports, with the real dispatcher
/// (recording subscriber first, then the production cascade subscribers).
pub struct TestEnv {
    pub services: ApplicationServices,
    pub articles: Arc<InMemoryArticleRepo>,
    pub categories: Arc<InMemoryCategoryRepo>,
    pub tags: Arc<InMemoryTagRepo>,
    pub comments: Arc<InMemoryCommentRepo>,
    pub users: Arc<InMemoryUserRepo>,
    pub cache: Arc<InMemoryCache>,
    pub clock: Arc<ManualClock>,
    pub recorded: Arc<RecordingSubscriber>,
}

// one subscriber per test process, no matter how many tests run
static TRACING: Lazy<()> = Lazy::new(blogcore::init_tracing);

pub fn test_env() -> TestEnv {
    Lazy::force(&TRACING);

    let articles = Arc::new(InMemoryArticleRepo::new());
    let categories = Arc::new(InMemoryCategoryRepo::new());
    let tags = Arc::new(InMemoryTagRepo::new());
    let comments = Arc::new(InMemoryCommentRepo::new());
    let users = Arc::new(InMemoryUserRepo::new());
    let cache = Arc::new(InMemoryCache::new());
    let clock = Arc::new(ManualClock::new());
    let recorded = Arc::new(RecordingSubscriber::new());

    let dispatcher = SyncEventDispatcher::with_subscribers(vec![
        Arc::clone(&recorded) as _,
        Arc::new(TagLinkCascadeSubscriber::new(Arc::clone(&articles) as _)),
        Arc::new(CacheInvalidationSubscriber::new(Arc::clone(&cache) as _)),
    ]);
    let publisher: Arc<dyn EventPublisher> = Arc::new(dispatcher);

    let ports = ApplicationPorts {
        article_write_repo: Arc::clone(&articles) as _,
        article_read_repo: Arc::clone(&articles) as _,
        category_repo: Arc::clone(&categories) as _,
        tag_repo: Arc::clone(&tags) as _,
        comment_write_repo: Arc::clone(&comments) as _,
        comment_read_repo: Arc::clone(&comments) as _,
        user_repo: Arc::clone(&users) as _,
        cache: Arc::clone(&cache) as _,
        clock: Arc::clone(&clock) as _,
    };

    let services = ApplicationServices::with_publisher(&AppConfig::default(), ports, publisher);

    TestEnv {
        services,
        articles,
        categories,
        tags,
        comments,
        users,
        cache,
        clock,
        recorded,
    }
}

impl TestEnv {
    /// Insert a user and return an acting identity for it.
    pub async fn seed_user(&self, username: &str) -> AuthenticatedUser {
        let now = Utc::now();
        let user = self
            .users
            .insert(NewUser {
                github_id: GitHubId::new(format!("gh-{username}")).unwrap(),
                username: Username::new(username).unwrap(),
                display_name: username.to_string(),
                avatar_url: None,
                created_at: now,
                updated_at: now,
            })
            .await
            .unwrap();
        AuthenticatedUser::new(user.id)
    }

    pub fn actor(&self, id: i64) -> AuthenticatedUser {
        AuthenticatedUser::new(UserId::new(id).unwrap())
    }

    /// Event types recorded by the dispatcher, in delivery order.
    pub fn recorded_event_types(&self) -> Vec<&'static str> {
        self.recorded
            .events()
            .iter()
            .map(|event| event.payload.event_type())
            .collect()
    }
}
