//! Business-rule layer between handlers and repositories.
//!
//! One generic [`CrudService`] is instantiated per resource.

pub mod crud;

use roomboard_db::models::board::Board;
use roomboard_db::models::room::Room;
use roomboard_db::models::todo::Todo;

pub use crud::CrudService;

pub type RoomService = CrudService<Room>;
pub type BoardService = CrudService<Board>;
pub type TodoService = CrudService<Todo>;
