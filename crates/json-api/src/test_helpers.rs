//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use shopdesk_app::{
    context::AppContext,
    domain::{
        categories::MockCategoriesService, collections::MockCollectionsService,
        dashboard::MockDashboardService, orders::MockOrdersService,
        products::MockProductsService, users::MockUsersService,
    },
    session::{MockSessionService, Secret, Session, SessionContext, StaffUser},
};

use crate::{extensions::*, state::State};

pub(crate) const TEST_ACCESS_TOKEN: &str = "test-access-token";

pub(crate) fn test_user() -> StaffUser {
    StaffUser {
        id: Uuid::nil(),
        email: Some("staff@shopdesk.test".to_string()),
    }
}

/// Session the guard would resolve for [`TEST_ACCESS_TOKEN`].
pub(crate) fn test_session() -> SessionContext {
    SessionContext {
        access_token: Secret::new(TEST_ACCESS_TOKEN),
        user: test_user(),
    }
}

/// Session returned by sign-in and refresh mocks.
pub(crate) fn test_signed_in_session() -> Session {
    Session {
        access_token: Secret::new("access-token"),
        refresh_token: Secret::new("refresh-token"),
        expires_at: Timestamp::UNIX_EPOCH,
        user: test_user(),
    }
}

#[salvo::handler]
pub(crate) async fn inject_session(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_session(test_session());
    ctrl.call_next(req, depot, res).await;
}

/// Service mocks that fail the test on any call unless a test sets expectations.
pub(crate) struct TestServices {
    pub(crate) session: MockSessionService,
    pub(crate) products: MockProductsService,
    pub(crate) categories: MockCategoriesService,
    pub(crate) users: MockUsersService,
    pub(crate) orders: MockOrdersService,
    pub(crate) collections: MockCollectionsService,
    pub(crate) dashboard: MockDashboardService,
}

impl Default for TestServices {
    fn default() -> Self {
        Self {
            session: MockSessionService::new(),
            products: MockProductsService::new(),
            categories: MockCategoriesService::new(),
            users: MockUsersService::new(),
            orders: MockOrdersService::new(),
            collections: MockCollectionsService::new(),
            dashboard: MockDashboardService::new(),
        }
    }
}

impl TestServices {
    pub(crate) fn into_state(self) -> Arc<State> {
        State::from_app_context(AppContext {
            session: Arc::new(self.session),
            products: Arc::new(self.products),
            categories: Arc::new(self.categories),
            users: Arc::new(self.users),
            orders: Arc::new(self.orders),
            collections: Arc::new(self.collections),
            dashboard: Arc::new(self.dashboard),
        })
    }

    /// Serve `route` as a signed-in staff member.
    pub(crate) fn signed_in(self, route: Router) -> Service {
        Service::new(
            Router::new()
                .hoop(inject(self.into_state()))
                .hoop(inject_session)
                .push(route),
        )
    }
}

pub(crate) fn state_with_session(session: MockSessionService) -> Arc<State> {
    TestServices {
        session,
        ..TestServices::default()
    }
    .into_state()
}

/// Serve an open route, without a resolved session.
pub(crate) fn open_service(session: MockSessionService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_session(session)))
            .push(route),
    )
}

pub(crate) fn guarded_session_service(session: MockSessionService, route: Router) -> Service {
    TestServices {
        session,
        ..TestServices::default()
    }
    .signed_in(route)
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    TestServices {
        products,
        ..TestServices::default()
    }
    .signed_in(route)
}

pub(crate) fn categories_service(categories: MockCategoriesService, route: Router) -> Service {
    TestServices {
        categories,
        ..TestServices::default()
    }
    .signed_in(route)
}

pub(crate) fn users_service(users: MockUsersService, route: Router) -> Service {
    TestServices {
        users,
        ..TestServices::default()
    }
    .signed_in(route)
}

pub(crate) fn orders_service(orders: MockOrdersService, route: Router) -> Service {
    TestServices {
        orders,
        ..TestServices::default()
    }
    .signed_in(route)
}

pub(crate) fn collections_service(collections: MockCollectionsService, route: Router) -> Service {
    TestServices {
        collections,
        ..TestServices::default()
    }
    .signed_in(route)
}

pub(crate) fn dashboard_service(dashboard: MockDashboardService, route: Router) -> Service {
    TestServices {
        dashboard,
        ..TestServices::default()
    }
    .signed_in(route)
}
