// Wrap std:: modules in namespace
#[allow(unused_imports)]
mod stdlib {

    pub use std::{
        borrow,
        cmp,
        convert,
        default,
        fmt,
        hash,
        io,
        iter,
        marker,
        mem,
        ops,
        str,
        string,
        vec,
    };

    pub use std::vec::Vec;

    #[cfg(test)]
    pub use std::collections::hash_map::DefaultHasher;
}
