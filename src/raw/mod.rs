mod degree;
mod node;
mod raw_map;

pub(crate) use degree::Degree;
pub(crate) use node::Node;
pub(crate) use raw_map::RawLarchMap;
