/// A `take_while` for peekable iterators that leaves the first rejected
/// item in place.
///
/// `Iterator::take_while` has to pull the item that fails the predicate in
/// order to see it, which loses that item. Going through `Peekable::next_if`
/// means the caller can keep reading from the same iterator afterwards.
use std::iter::Peekable;

pub struct PeekingTakeWhile<'a, I: Iterator, P> {
    iter: &'a mut Peekable<I>,
    predicate: P,
}

impl<I, P> Iterator for PeekingTakeWhile<'_, I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let predicate = &mut self.predicate;
        self.iter.next_if(|item| predicate(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Nothing is known up front, the predicate may stop on any item.
        (0, self.iter.size_hint().1)
    }
}

pub trait PeekingTakeWhileExt<'a, I: Iterator> {
    /// Yield items while `predicate` holds. The first item failing it stays
    /// in the underlying iterator.
    fn peeking_take_while<P>(self, predicate: P) -> PeekingTakeWhile<'a, I, P>
    where
        P: FnMut(&I::Item) -> bool;
}

impl<'a, I: Iterator> PeekingTakeWhileExt<'a, I> for &'a mut Peekable<I> {
    fn peeking_take_while<P>(self, predicate: P) -> PeekingTakeWhile<'a, I, P>
    where
        P: FnMut(&I::Item) -> bool,
    {
        PeekingTakeWhile {
            iter: self,
            predicate,
        }
    }
}
