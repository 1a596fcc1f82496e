use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use crate::components::layout::AppLayout;
use crate::pages::{courses::Courses, enrollments::Enrollments};

#[derive(Routable, Clone, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    CoursesPage {},
    #[route("/enrollments")]
    EnrollmentsPage {},
}

#[component]
pub fn CoursesPage() -> Element {
    rsx! { AppLayout { Courses {} } }
}

#[component]
pub fn EnrollmentsPage() -> Element {
    rsx! { AppLayout { Enrollments {} } }
}

#[component]
pub fn App() -> Element {
    rsx! {
        Router::<Route> {}
    }
}
