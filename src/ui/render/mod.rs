mod all;
mod footer;
mod form;
mod log;
mod nav;
mod notices;
mod page;
mod sections;

use self::log::log;
use super::*;
use footer::footer;
use form::form;
use nav::nav;
use notices::notices;
use page::page;

pub use all::all as render;
