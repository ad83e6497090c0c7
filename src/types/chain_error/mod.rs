//! Chained error values with call-site stacks and optional business codes.
//!
//! An [`Error`] is a handle to one immutable node of a singly-linked chain. Every wrap
//! operation builds a fresh node whose cause is the handle it was called on, so the
//! original error stays valid and a chain suffix can be shared by several errors.
//!
//! Node kinds:
//!
//! | Kind | own message | code | stack | cause |
//! |---|---|---|---|---|
//! | [`NodeKind::Fundamental`] | yes | - | yes | - |
//! | [`NodeKind::Foreign`] | inner `Display` | - | yes | - |
//! | [`NodeKind::WithStack`] | delegates to cause | - | yes | yes |
//! | [`NodeKind::WithMessage`] | yes | - | - | yes |
//! | [`NodeKind::WithCode`] | yes | yes | yes | optional |
//!
//! Coded nodes stay coded: [`Error::with_stack`] and [`Error::wrap`] on a coded error
//! build another coded node carrying the same code. Only [`Error::wrap_c`] changes the
//! effective code of a chain.
//!
//! # Examples
//!
//! ```
//! use error_coder::Error;
//!
//! let root = Error::new("disk full");
//! let coded = root.wrap_c(100, "save failed");
//! let outer = coded.with_stack();
//!
//! assert_eq!(outer.code(), Some(100));
//! assert_eq!(outer.to_string(), "save failed");
//! assert!(outer.cause().ptr_eq(&root));
//! ```
use std::error::Error as StdError;
use std::sync::Arc;

use crate::coder::{CodeRegistry, Coder};
use crate::types::error_formatter::ReportBuilder;
use crate::types::stack::Stack;
use crate::types::ErrorVec;

mod iter;
mod traits;

pub use iter::Chain;
pub use traits::Quoted;

/// Discriminant of a chain node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Root created by [`Error::new`].
    Fundamental,
    /// Root adopted from another error type by [`Error::from_std`].
    Foreign,
    /// Stack-only wrapper; renders its cause's message.
    WithStack,
    /// Message-only wrapper without a stack.
    WithMessage,
    /// Node carrying a business code, either a root or a wrapper.
    WithCode,
}

pub(crate) enum Kind {
    Fundamental { message: String, stack: Stack },
    Foreign { error: Box<dyn StdError + Send + Sync + 'static>, stack: Stack },
    WithStack { stack: Stack },
    WithMessage { message: String },
    WithCode { code: i32, text: String, stack: Stack },
}

pub(crate) struct Node {
    pub(crate) kind: Kind,
    pub(crate) cause: Option<Error>,
}

/// Immutable, cheaply clonable handle to a node of an error chain.
#[must_use]
#[derive(Clone)]
pub struct Error {
    pub(crate) inner: Arc<Node>,
}

impl Error {
    #[inline]
    fn from_node(kind: Kind, cause: Option<Error>) -> Self {
        Self { inner: Arc::new(Node { kind, cause }) }
    }

    /// Creates a root error with the given message and captures the caller's stack.
    #[track_caller]
    pub fn new<M: Into<String>>(message: M) -> Self {
        Self::from_node(Kind::Fundamental { message: message.into(), stack: Stack::capture() }, None)
    }

    /// Creates a root coded error. The message becomes the node's display text.
    #[track_caller]
    pub fn with_code<M: Into<String>>(code: i32, message: M) -> Self {
        Self::from_node(
            Kind::WithCode { code, text: message.into(), stack: Stack::capture() },
            None,
        )
    }

    /// Adopts an error of another type as the root of a chain.
    ///
    /// The adopted root records the caller's stack but has no cause relation; its
    /// [`source`](std::error::Error::source) is forwarded from the inner error.
    #[track_caller]
    pub fn from_std<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::from_boxed(Box::new(error))
    }

    /// Adopts an already boxed error as the root of a chain.
    #[track_caller]
    pub fn from_boxed(error: Box<dyn StdError + Send + Sync + 'static>) -> Self {
        Self::from_node(Kind::Foreign { error, stack: Stack::capture() }, None)
    }

    /// Records a fresh stack on top of this error.
    ///
    /// A coded error yields another coded node with the same code and text,
    /// anything else yields a stack-only node that renders this error's message.
    #[track_caller]
    pub fn with_stack(&self) -> Self {
        let stack = Stack::capture();
        let kind = match &self.inner.kind {
            Kind::WithCode { code, text, .. } => {
                Kind::WithCode { code: *code, text: text.clone(), stack }
            },
            _ => Kind::WithStack { stack },
        };
        Self::from_node(kind, Some(self.clone()))
    }

    /// Annotates this error with a message and a fresh stack.
    ///
    /// The new message replaces the displayed text. On a coded error the code is kept
    /// and a single coded node is produced; otherwise a message node is wrapped in a
    /// stack node.
    #[track_caller]
    pub fn wrap<M: Into<String>>(&self, message: M) -> Self {
        let stack = Stack::capture();
        let message = message.into();
        if let Kind::WithCode { code, .. } = &self.inner.kind {
            return Self::from_node(
                Kind::WithCode { code: *code, text: message, stack },
                Some(self.clone()),
            );
        }

        let annotated = Self::from_node(Kind::WithMessage { message }, Some(self.clone()));
        Self::from_node(Kind::WithStack { stack }, Some(annotated))
    }

    /// Annotates this error with a message without capturing a stack.
    pub fn with_message<M: Into<String>>(&self, message: M) -> Self {
        Self::from_node(Kind::WithMessage { message: message.into() }, Some(self.clone()))
    }

    /// Wraps this error in a coded node with a new code and text, regardless of any code
    /// already present in the chain.
    #[track_caller]
    pub fn wrap_c<M: Into<String>>(&self, code: i32, message: M) -> Self {
        Self::from_node(
            Kind::WithCode { code, text: message.into(), stack: Stack::capture() },
            Some(self.clone()),
        )
    }

    /// Returns the kind of the outermost node.
    #[inline]
    pub fn kind(&self) -> NodeKind {
        match &self.inner.kind {
            Kind::Fundamental { .. } => NodeKind::Fundamental,
            Kind::Foreign { .. } => NodeKind::Foreign,
            Kind::WithStack { .. } => NodeKind::WithStack,
            Kind::WithMessage { .. } => NodeKind::WithMessage,
            Kind::WithCode { .. } => NodeKind::WithCode,
        }
    }

    /// Returns `true` if the outermost node carries a business code.
    #[inline]
    pub fn is_coded(&self) -> bool {
        matches!(self.inner.kind, Kind::WithCode { .. })
    }

    /// Returns the code of the outermost node, if it is a coded node.
    #[inline]
    pub fn code(&self) -> Option<i32> {
        match self.inner.kind {
            Kind::WithCode { code, .. } => Some(code),
            _ => None,
        }
    }

    /// Returns the stack recorded by the outermost node, if it captured one.
    #[inline]
    pub fn stack(&self) -> Option<&Stack> {
        match &self.inner.kind {
            Kind::Fundamental { stack, .. }
            | Kind::Foreign { stack, .. }
            | Kind::WithStack { stack }
            | Kind::WithCode { stack, .. } => Some(stack),
            Kind::WithMessage { .. } => None,
        }
    }

    /// Returns the immediately wrapped error.
    #[inline]
    pub fn source_error(&self) -> Option<&Error> {
        self.inner.cause.as_ref()
    }

    /// Follows the cause relation to the deepest error of the chain.
    ///
    /// Roots (including adopted foreign errors) are their own cause.
    pub fn cause(&self) -> &Error {
        let mut err = self;
        while let Some(next) = err.source_error() {
            err = next;
        }
        err
    }

    /// Iterates from this node toward the root, starting with `self`.
    #[inline]
    pub fn chain(&self) -> Chain<'_> {
        Chain::new(self)
    }

    /// Reports whether `code` matches this error.
    ///
    /// An error that is not a coded node matches every code. A coded node matches when
    /// its own code equals `code`, or when an unbroken run of coded causes below it
    /// contains `code`; the first non-coded cause ends the search with `false`.
    /// Use [`has_code`](Self::has_code) for a strict search of the whole chain.
    pub fn is_code(&self, code: i32) -> bool {
        if !self.is_coded() {
            return true;
        }
        self.chain().map_while(Error::code).any(|c| c == code)
    }

    /// Reports whether any coded node anywhere in the chain carries `code`.
    pub fn has_code(&self, code: i32) -> bool {
        self.chain().filter_map(Error::code).any(|c| c == code)
    }

    /// Collects every code in the chain, outermost first.
    pub fn codes(&self) -> ErrorVec<i32> {
        self.chain().filter_map(Error::code).collect()
    }

    /// Resolves the coder for this error against the global registry.
    ///
    /// See [`CodeRegistry::parse_coder`].
    pub fn parse_coder(&self) -> Arc<dyn Coder> {
        CodeRegistry::global().parse_coder(self)
    }

    /// Returns a reference to the adopted foreign error of type `T`, if the chain has one.
    pub fn downcast_ref<T>(&self) -> Option<&T>
    where
        T: StdError + 'static,
    {
        self.chain().find_map(|err| match &err.inner.kind {
            Kind::Foreign { error, .. } => error.downcast_ref::<T>(),
            _ => None,
        })
    }

    /// Returns `true` if both handles point to the same node.
    #[inline]
    pub fn ptr_eq(&self, other: &Error) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Returns a builder for the verbose, multi-line rendering of this chain.
    #[inline]
    pub fn report(&self) -> ReportBuilder<'_> {
        ReportBuilder::new(self)
    }
}
