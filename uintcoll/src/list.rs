use crate::display::{write_bracketed, write_line};
use crate::width::{Element, ElementWidth};
use crate::{Error, Result};
use std::fmt::{self, Debug, Display};
use std::io;
use std::iter;
use std::marker::PhantomData;
use std::ptr::NonNull;

/// A list node. While linked, the node is owned by its predecessor (or the
/// list for `head`) through `next`; `prev` is a non-owning back-reference.
pub struct Node<T: Element> {
    value: T,
    prev: Option<NonNull<Node<T>>>,
    next: Option<NonNull<Node<T>>>,
}
impl<T: Element> Node<T> {
    fn new(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            prev: None,
            next: None,
        })
    }

    pub fn value(&self) -> T {
        self.value
    }

    pub fn next(&self) -> Option<&Node<T>> {
        // Linked nodes live until the list is mutated, which this borrow prevents.
        self.next.map(|next| unsafe { next.as_ref() })
    }

    pub fn prev(&self) -> Option<&Node<T>> {
        self.prev.map(|prev| unsafe { prev.as_ref() })
    }

    pub fn into_value(self: Box<Self>) -> T {
        self.value
    }
}
impl<T: Element> Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("has_prev", &self.prev.is_some())
            .field("has_next", &self.next.is_some())
            .finish()
    }
}

/// A doubly-linked list of one unsigned integer width, `u8` unless stated otherwise.
///
/// Nodes are leaked out of their `Box` on push and only ever reached through
/// raw pointers until a pop or release reclaims them with `Box::from_raw`.
/// The length is not cached: [`LinkedList::length`] walks the chain. Popped
/// nodes are handed to the caller fully detached.
pub struct LinkedList<T: Element = u8> {
    head: Option<NonNull<Node<T>>>,
    _marker: PhantomData<Box<Node<T>>>,
}
impl<T: Element> LinkedList<T> {
    pub fn new() -> Self {
        Self {
            head: None,
            _marker: PhantomData,
        }
    }

    pub fn head(&self) -> Option<&Node<T>> {
        self.head.map(|head| unsafe { head.as_ref() })
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn length(&self) -> usize {
        self.nodes().count()
    }

    pub fn element_width(&self) -> ElementWidth {
        T::WIDTH
    }

    pub fn elem_size(&self) -> usize {
        T::WIDTH.size()
    }

    pub fn push_front(&mut self, value: T) {
        let node = NonNull::from(Box::leak(Node::new(value)));

        unsafe {
            (*node.as_ptr()).next = self.head;
            if let Some(head) = self.head {
                (*head.as_ptr()).prev = Some(node);
            }
        }

        self.head = Some(node);
    }

    pub fn push_back(&mut self, value: T) {
        let node = NonNull::from(Box::leak(Node::new(value)));

        match self.tail() {
            Some(tail) => unsafe {
                (*tail.as_ptr()).next = Some(node);
                (*node.as_ptr()).prev = Some(tail);
            },
            None => self.head = Some(node),
        }
    }

    pub fn pop_front(&mut self) -> Result<Box<Node<T>>> {
        let head = self.head.ok_or(Error::EmptyList)?;
        let mut node = unsafe { Box::from_raw(head.as_ptr()) };

        self.head = node.next.take();
        if let Some(head) = self.head {
            unsafe { (*head.as_ptr()).prev = None };
        }

        log::trace!("LinkedList<{}> popped {} off the front", T::WIDTH, node.value);

        Ok(node)
    }

    pub fn pop_back(&mut self) -> Result<Box<Node<T>>> {
        let tail = self.tail().ok_or(Error::EmptyList)?;
        let mut node = unsafe { Box::from_raw(tail.as_ptr()) };

        match node.prev.take() {
            Some(prev) => unsafe { (*prev.as_ptr()).next = None },
            None => self.head = None,
        }

        log::trace!("LinkedList<{}> popped {} off the back", T::WIDTH, node.value);

        Ok(node)
    }

    /// Frees every node. The list is left empty and can be reused.
    pub fn destroy(&mut self) {
        log::debug!("Destroying LinkedList<{}> ({} nodes)", T::WIDTH, self.length());

        self.release();
    }

    pub fn display(&self) -> io::Result<()> {
        self.write_to(&mut io::stdout().lock())
    }

    /// Same output as [`LinkedList::display`], into any writer.
    pub fn write_to(&self, writer: &mut impl io::Write) -> io::Result<()> {
        write_line(writer, self)
    }

    fn nodes(&self) -> impl Iterator<Item = &Node<T>> {
        iter::successors(self.head(), |node| node.next())
    }

    fn tail(&self) -> Option<NonNull<Node<T>>> {
        let mut node = self.head?;
        while let Some(next) = unsafe { node.as_ref() }.next {
            node = next;
        }

        Some(node)
    }

    // Reclaims front to back so long chains don't recurse.
    fn release(&mut self) {
        let mut next = self.head.take();
        while let Some(node) = next {
            let node = unsafe { Box::from_raw(node.as_ptr()) };
            next = node.next;
        }
    }
}
impl<T: Element> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}
impl<T: Element> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.release();
    }
}
impl<T: Element> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.nodes().map(Node::value))
            .finish()
    }
}
impl<T: Element> Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_bracketed(f, self.nodes().map(Node::value))
    }
}
