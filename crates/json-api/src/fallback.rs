//! Catch-all for paths no page claims.

use salvo::prelude::*;

/// Send signed-in staff to the dashboard. Runs behind the session guard, so
/// anonymous requests never get here.
#[handler]
pub(crate) async fn handler(res: &mut Response) {
    res.render(Redirect::other("/dashboard"));
}
