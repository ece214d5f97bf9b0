//! Types that have a nil form

use std::borrow::Cow;
use std::cell::{Cell, RefCell};
use std::cmp::{Ordering, Reverse};
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::ffi::{CString, OsString};
use std::marker::PhantomData;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::num::{
    NonZeroI128, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI8, NonZeroIsize, NonZeroU128,
    NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU8, NonZeroUsize, Wrapping,
};
use std::ops::{Range, RangeInclusive};
use std::path::PathBuf;
use std::ptr::NonNull;
use std::rc::Rc;
use std::sync::{Arc, Mutex, RwLock};
use std::time::{Duration, Instant, SystemTime};

/// Capability queried by [`Optional::new`](crate::Optional::new) to reject
/// nil values.
///
/// Handles that can point at nothing (`Option<T>`, raw pointers) report
/// their nil form; plain values never are nil. Implement it for your own
/// types with [`never_nil!`](crate::never_nil) or by hand when the type has a
/// meaningful nil state.
pub trait Nilable {
    fn is_nil(&self) -> bool;
}

/// Implement [`Nilable`] as "never nil" for the listed types.
#[macro_export]
macro_rules! never_nil {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::Nilable for $ty {
                #[inline]
                fn is_nil(&self) -> bool {
                    false
                }
            }
        )*
    };
}

never_nil!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    String,
    PathBuf,
    OsString,
    CString,
    Duration,
    Instant,
    SystemTime,
    Ordering,
    IpAddr,
    Ipv4Addr,
    Ipv6Addr,
    SocketAddr,
    NonZeroI8,
    NonZeroI16,
    NonZeroI32,
    NonZeroI64,
    NonZeroI128,
    NonZeroIsize,
    NonZeroU8,
    NonZeroU16,
    NonZeroU32,
    NonZeroU64,
    NonZeroU128,
    NonZeroUsize,
);

impl<T> Nilable for Option<T> {
    #[inline]
    fn is_nil(&self) -> bool {
        self.is_none()
    }
}

impl<T: ?Sized> Nilable for *const T {
    #[inline]
    fn is_nil(&self) -> bool {
        self.is_null()
    }
}

impl<T: ?Sized> Nilable for *mut T {
    #[inline]
    fn is_nil(&self) -> bool {
        self.is_null()
    }
}

impl<T: ?Sized> Nilable for NonNull<T> {
    #[inline]
    fn is_nil(&self) -> bool {
        false
    }
}

macro_rules! never_nil_generic {
    ($([$($params:tt)*] $ty:ty),* $(,)?) => {
        $(
            impl<$($params)*> Nilable for $ty {
                #[inline]
                fn is_nil(&self) -> bool {
                    false
                }
            }
        )*
    };
}

never_nil_generic!(
    ['a, T: ?Sized] &'a T,
    ['a, T: ?Sized] &'a mut T,
    [T: ?Sized] Box<T>,
    [T: ?Sized] Rc<T>,
    [T: ?Sized] Arc<T>,
    [T] Vec<T>,
    [T] VecDeque<T>,
    [T, const N: usize] [T; N],
    [K, V, S] HashMap<K, V, S>,
    [K, V] BTreeMap<K, V>,
    [T, S] HashSet<T, S>,
    [T] BTreeSet<T>,
    [T] BinaryHeap<T>,
    [T] LinkedList<T>,
    [T: ?Sized] Cell<T>,
    [T: ?Sized] RefCell<T>,
    [T: ?Sized] Mutex<T>,
    [T: ?Sized] RwLock<T>,
    [T: ?Sized] PhantomData<T>,
    [T] Wrapping<T>,
    [T] Reverse<T>,
    [T] Range<T>,
    [T] RangeInclusive<T>,
    ['a, B: ?Sized + ToOwned] Cow<'a, B>,
    [T, E] Result<T, E>,
    [T] crate::Optional<T>,
);

// Tuples are plain values whatever their elements are
never_nil_generic!(
    [A] (A,),
    [A, B] (A, B),
    [A, B, C] (A, B, C),
    [A, B, C, D] (A, B, C, D),
    [A, B, C, D, E] (A, B, C, D, E),
    [A, B, C, D, E, F] (A, B, C, D, E, F),
    [A, B, C, D, E, F, G] (A, B, C, D, E, F, G),
    [A, B, C, D, E, F, G, H] (A, B, C, D, E, F, G, H),
    [A, B, C, D, E, F, G, H, I] (A, B, C, D, E, F, G, H, I),
    [A, B, C, D, E, F, G, H, I, J] (A, B, C, D, E, F, G, H, I, J),
    [A, B, C, D, E, F, G, H, I, J, K] (A, B, C, D, E, F, G, H, I, J, K),
    [A, B, C, D, E, F, G, H, I, J, K, L] (A, B, C, D, E, F, G, H, I, J, K, L),
);
