pub mod http_session;

pub use http_session::{
    HttpResponse, HttpSession, ReqwestSession, ReqwestSessionFactory, SessionFactory,
};
